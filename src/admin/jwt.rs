// ABOUTME: HS256 session token signing and verification for the admin gate
// ABOUTME: Issues 24h admin tokens and verifies signature, time window, and role claims
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! JWT Session Tokens
//!
//! Tokens are signed with the process-wide secret and carry exactly
//! `{sub, role, iat, exp}`. Verification is a pure computation: the same token
//! checked at the same instant always yields the same result, and nothing is
//! written anywhere.
//!
//! The time window is checked here rather than by `jsonwebtoken`, so that the
//! caller's `now` is authoritative and `exp` is exclusive with zero leeway.

use crate::admin::models::{AdminSession, AuthError, IssuedSession, Role, SessionClaims};
use crate::constants::{secrets, session};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{distributions::Alphanumeric, Rng};

/// Signs and verifies admin session tokens
#[derive(Clone)]
pub struct SessionTokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    session_ttl: Duration,
}

impl SessionTokenManager {
    /// Create a manager for the given HMAC secret with the standard 24h lifetime
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Window is enforced in `verify_at` against the caller's clock
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "iat", "exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            session_ttl: Duration::hours(session::TTL_HOURS),
        }
    }

    /// Generate a cryptographically secure signing secret
    #[must_use]
    pub fn generate_secret() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(secrets::GENERATED_SECRET_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Session lifetime applied to new tokens
    #[must_use]
    pub const fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Issue a token for `subject` valid from now for the session lifetime
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails
    pub fn issue(&self, subject: &str, role: Role) -> AppResult<IssuedSession> {
        self.issue_at(subject, role, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails
    pub fn issue_at(
        &self,
        subject: &str,
        role: Role,
        now: DateTime<Utc>,
    ) -> AppResult<IssuedSession> {
        let claims = SessionClaims {
            sub: subject.to_owned(),
            role,
            iat: now.timestamp(),
            exp: (now + self.session_ttl).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal("Failed to sign session token").with_source(e))?;

        Ok(IssuedSession { token, claims })
    }

    /// Verify signature and time window at the current time
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] if the token is malformed, tampered with,
    /// expired, or not yet valid
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify signature and time window at `now`; the role is not inspected
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] if the token is malformed, tampered with,
    /// expired (`exp <= now`), or not yet valid (`now < iat`)
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, AuthError> {
        let claims = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(AuthError::invalid_token)?
            .claims;

        let now_ts = now.timestamp();
        if now_ts >= claims.exp {
            return Err(AuthError::invalid_token(format!(
                "token expired at {}",
                claims.expires_at().format("%Y-%m-%d %H:%M:%S UTC")
            )));
        }
        if now_ts < claims.iat {
            return Err(AuthError::invalid_token("token issued in the future"));
        }

        Ok(claims)
    }

    /// Full gate check: valid token whose role is admin
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] for verification failures and
    /// [`AuthError::InsufficientRole`] when the token is genuine but not admin
    pub fn authorize_admin_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AdminSession, AuthError> {
        let claims = self.verify_at(token, now)?;
        match claims.role {
            Role::Admin => Ok(AdminSession::from(&claims)),
            role @ Role::Subscriber => Err(AuthError::InsufficientRole { role }),
        }
    }
}
