// ABOUTME: Admin identity and session-signing configuration loaded once at startup
// ABOUTME: Classifies the JWT signing secret so insecure deployments are caught before serving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

use crate::admin::AuthError;
use crate::constants::secrets;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;

/// How trustworthy the configured signing secret is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretStatus {
    /// An operator-supplied secret that is not a known placeholder
    Configured,
    /// A value copied from a template (`your-secret-key`, `changeme`, ...)
    Placeholder,
    /// No secret supplied; the fallback placeholder is used
    Missing,
}

impl SecretStatus {
    /// Classify a raw secret value
    #[must_use]
    pub fn classify(secret: Option<&str>) -> Self {
        match secret.map(str::trim) {
            None | Some("") => Self::Missing,
            Some(value)
                if secrets::KNOWN_PLACEHOLDERS
                    .iter()
                    .any(|placeholder| placeholder.eq_ignore_ascii_case(value)) =>
            {
                Self::Placeholder
            }
            Some(_) => Self::Configured,
        }
    }

    /// Whether tokens signed with this secret can be trusted
    #[must_use]
    pub const fn is_secure(self) -> bool {
        matches!(self, Self::Configured)
    }
}

/// Signing secret; `Debug` never prints the value
#[derive(Clone)]
pub struct SigningSecret {
    value: String,
    status: SecretStatus,
}

impl SigningSecret {
    /// Build from an optional raw value, falling back to the placeholder when absent
    #[must_use]
    pub fn new(raw: Option<String>) -> Self {
        let status = SecretStatus::classify(raw.as_deref());
        let value = match status {
            SecretStatus::Missing => secrets::FALLBACK_SECRET.to_owned(),
            SecretStatus::Configured | SecretStatus::Placeholder => raw.unwrap_or_default(),
        };
        Self { value, status }
    }

    /// Raw bytes for HMAC keys
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }

    /// Classification of the secret
    #[must_use]
    pub const fn status(&self) -> SecretStatus {
        self.status
    }

    /// The `InsecureConfiguration` condition, if this secret triggers it
    #[must_use]
    pub fn insecure_reason(&self) -> Option<AuthError> {
        match self.status {
            SecretStatus::Configured => None,
            SecretStatus::Placeholder => Some(AuthError::InsecureConfiguration {
                reason: "JWT_SECRET is a known placeholder value".to_owned(),
            }),
            SecretStatus::Missing => Some(AuthError::InsecureConfiguration {
                reason: "JWT_SECRET is not set".to_owned(),
            }),
        }
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningSecret")
            .field("value", &"<redacted>")
            .field("status", &self.status)
            .finish()
    }
}

/// Admin credentials and session signing configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The single admin identity
    pub admin_email: String,
    /// Plain password or an Argon2 PHC string (`$argon2id$...`)
    pub admin_password: String,
    /// HMAC secret for session tokens
    pub jwt_secret: SigningSecret,
    /// Let the gate trust an insecure secret outside production
    pub allow_insecure_secret: bool,
}

impl AuthConfig {
    /// Load authentication configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if `ALLOW_INSECURE_JWT_SECRET` is not a boolean
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_default(),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_default(),
            jwt_secret: SigningSecret::new(env::var("JWT_SECRET").ok()),
            allow_insecure_secret: env_var_or("ALLOW_INSECURE_JWT_SECRET", "false")
                .parse()
                .map_err(|e| {
                    AppError::invalid_input(format!(
                        "Invalid ALLOW_INSECURE_JWT_SECRET value: {e}"
                    ))
                })?,
        })
    }

    /// Whether the admin password is stored as an Argon2 hash
    #[must_use]
    pub fn password_is_hashed(&self) -> bool {
        self.admin_password.starts_with("$argon2")
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
