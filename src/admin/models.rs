// ABOUTME: Session token claims, the closed Role enum, and the admin auth error taxonomy
// ABOUTME: Shared by the token issuer, the access gate, and the admin route handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Capability carried by a session token
///
/// Only [`Role::Admin`] opens protected paths. Unknown role strings fail to
/// deserialize, so they surface as a malformed token rather than a new role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access to the admin panel and admin API
    Admin,
    /// A newsletter subscriber principal; never admitted by the gate
    Subscriber,
}

impl Role {
    /// Whether this role may access admin-gated paths
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Wire name of the role
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Subscriber => "subscriber",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT claims for an admin session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the authenticated principal (admin email)
    pub sub: String,
    /// Capability tag
    pub role: Role,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration (unix seconds, exclusive)
    pub exp: i64,
}

impl SessionClaims {
    /// Issue time as a timestamp
    #[must_use]
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_default()
    }

    /// Expiry time as a timestamp
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }

    /// Whether `now` falls inside `[iat, exp)`
    #[must_use]
    pub fn is_current_at(&self, now: DateTime<Utc>) -> bool {
        let now = now.timestamp();
        self.iat <= now && now < self.exp
    }
}

/// A freshly signed session token
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Serialized JWT, the cookie value
    pub token: String,
    /// Claims that were signed
    pub claims: SessionClaims,
}

/// A verified admin principal, attached to requests that passed the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    /// Admin email
    pub subject: String,
    /// When the session ends
    pub expires_at: DateTime<Utc>,
}

impl From<&SessionClaims> for AdminSession {
    fn from(claims: &SessionClaims) -> Self {
        Self {
            subject: claims.sub.clone(),
            expires_at: claims.expires_at(),
        }
    }
}

/// Failures of the credential check and the session gate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Submitted email/password do not match the configured admin
    #[error("invalid credentials")]
    InvalidCredentials,
    /// A protected path was requested without a session cookie
    #[error("no session token presented")]
    MissingToken,
    /// The cookie failed signature, expiry, or format checks
    #[error("session token rejected: {reason}")]
    InvalidToken {
        /// What failed
        reason: String,
    },
    /// The token verified but its role lacks the admin capability
    #[error("role '{role}' lacks admin capability")]
    InsufficientRole {
        /// Role carried by the token
        role: Role,
    },
    /// The signing secret is absent or a known placeholder
    #[error("insecure signing configuration: {reason}")]
    InsecureConfiguration {
        /// Which condition was hit
        reason: String,
    },
}

impl AuthError {
    /// Build an `InvalidToken` from any displayable cause
    pub fn invalid_token(reason: impl fmt::Display) -> Self {
        Self::InvalidToken {
            reason: reason.to_string(),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidCredentials => Self::auth_invalid("Invalid credentials"),
            AuthError::MissingToken
            | AuthError::InvalidToken { .. }
            | AuthError::InsufficientRole { .. } => Self::auth_required(),
            AuthError::InsecureConfiguration { reason } => Self::config(reason),
        }
    }
}
