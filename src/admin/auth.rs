// ABOUTME: Admin credential check and session issuance for the login endpoint
// ABOUTME: Compares submitted credentials against the configured admin in constant time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! Admin Authentication
//!
//! There is exactly one admin identity, configured at startup. The configured
//! password may be plain text or an Argon2 PHC string; either way the comparison
//! never short-circuits on the first differing byte.

use crate::admin::jwt::SessionTokenManager;
use crate::admin::models::{AuthError, IssuedSession, Role};
use crate::config::security::{AuthConfig, SigningSecret};
use crate::errors::{AppError, AppResult};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::{info, warn};

/// Verifies admin credentials and issues session tokens
#[derive(Clone)]
pub struct AdminAuthenticator {
    email: String,
    password: String,
    tokens: Arc<SessionTokenManager>,
    secret: SigningSecret,
}

impl AdminAuthenticator {
    /// Create an authenticator for the configured admin
    #[must_use]
    pub fn new(config: &AuthConfig, tokens: Arc<SessionTokenManager>) -> Self {
        Self {
            email: config.admin_email.trim().to_owned(),
            password: config.admin_password.clone(),
            tokens,
            secret: config.jwt_secret.clone(),
        }
    }

    /// Token manager shared with the access gate
    #[must_use]
    pub fn tokens(&self) -> &Arc<SessionTokenManager> {
        &self.tokens
    }

    /// Check credentials and issue an admin session
    ///
    /// # Errors
    ///
    /// Returns an error if a field is empty, the credentials do not match, or
    /// token signing fails
    pub fn login(&self, email: &str, password: &str) -> AppResult<IssuedSession> {
        self.login_at(email, password, Utc::now())
    }

    /// Check credentials and issue an admin session as of `now`
    ///
    /// # Errors
    ///
    /// Returns an error if a field is empty, the credentials do not match, the
    /// configured password hash is unreadable, or token signing fails
    pub fn login_at(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> AppResult<IssuedSession> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::missing_field("Email and password are required"));
        }

        let email_matches = email.eq_ignore_ascii_case(&self.email);
        let password_matches = self.password_matches(password)?;
        if !(email_matches && password_matches) {
            info!("Admin login rejected");
            return Err(AuthError::InvalidCredentials.into());
        }

        if let Some(condition) = self.secret.insecure_reason() {
            warn!("Issuing admin session with an insecure signing secret: {condition}");
        }

        let issued = self.tokens.issue_at(&self.email, Role::Admin, now)?;
        info!(
            expires_at = %issued.claims.expires_at(),
            "Admin session issued"
        );
        Ok(issued)
    }

    fn password_matches(&self, submitted: &str) -> AppResult<bool> {
        if self.password.starts_with("$argon2") {
            let parsed = PasswordHash::new(&self.password).map_err(|e| {
                AppError::config(format!("ADMIN_PASSWORD is not a valid Argon2 hash: {e}"))
            })?;
            return Ok(Argon2::default()
                .verify_password(submitted.as_bytes(), &parsed)
                .is_ok());
        }

        Ok(submitted.as_bytes().ct_eq(self.password.as_bytes()).into())
    }
}

/// Hash a password with Argon2id for use as `ADMIN_PASSWORD`
///
/// # Errors
///
/// Returns an error if Argon2 hashing fails
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Argon2 password hashing failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn authenticator(password: &str) -> AdminAuthenticator {
        let config = AuthConfig {
            admin_email: "admin@site.com".to_owned(),
            admin_password: password.to_owned(),
            jwt_secret: SigningSecret::new(Some("unit-test-signing-secret-0123456789".to_owned())),
            allow_insecure_secret: false,
        };
        let tokens = Arc::new(SessionTokenManager::new(config.jwt_secret.as_bytes()));
        AdminAuthenticator::new(&config, tokens)
    }

    #[test]
    fn test_login_issues_admin_token() {
        let auth = authenticator("correct");
        let issued = auth.login("admin@site.com", "correct").unwrap();

        assert_eq!(issued.claims.role, Role::Admin);
        assert_eq!(issued.claims.sub, "admin@site.com");
        assert!(auth.tokens().authorize_admin_at(&issued.token, Utc::now()).is_ok());
    }

    #[test]
    fn test_email_is_case_insensitive_and_trimmed() {
        let auth = authenticator("correct");
        assert!(auth.login("  Admin@Site.com ", "correct").is_ok());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let auth = authenticator("correct");
        let error = auth.login("admin@site.com", "wrong").unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthInvalid);
        assert_eq!(error.message, "Invalid credentials");
    }

    #[test]
    fn test_wrong_email_rejected() {
        let auth = authenticator("correct");
        let error = auth.login("someone@else.com", "correct").unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthInvalid);
    }

    #[test]
    fn test_empty_fields_rejected_before_comparison() {
        let auth = authenticator("correct");
        let error = auth.login("", "correct").unwrap_err();
        assert_eq!(error.http_status(), 400);
        assert_eq!(error.message, "Email and password are required");

        let error = auth.login("admin@site.com", "").unwrap_err();
        assert_eq!(error.http_status(), 400);
    }

    #[test]
    fn test_argon2_configured_password() {
        let hash = hash_password("correct").unwrap();
        assert!(hash.starts_with("$argon2"));

        let auth = authenticator(&hash);
        assert!(auth.login("admin@site.com", "correct").is_ok());
        assert!(auth.login("admin@site.com", "wrong").is_err());
    }

    #[test]
    fn test_unreadable_hash_is_configuration_error() {
        let auth = authenticator("$argon2id$garbage");
        let error = auth.login("admin@site.com", "correct").unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }
}
