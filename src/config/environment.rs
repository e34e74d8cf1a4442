// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Builds the process-wide ServerConfig once at startup and validates it before serving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! Environment-based configuration management
//!
//! `ServerConfig` is constructed once in the binary and shared read-only through
//! `Arc`. Nothing else in the crate reads the process environment at request time.

use crate::config::security::AuthConfig;
use crate::config::types::{Environment, LogLevel};
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use std::env;
use tracing::{info, warn};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level requested for this crate
    pub log_level: LogLevel,
    /// Admin identity and signing secret
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| AppError::invalid_input(format!("Invalid HTTP_PORT value: {e}")))?,
            Err(_) => defaults::HTTP_PORT,
        };

        Ok(Self {
            http_port,
            host: env::var("HOST").unwrap_or_else(|_| defaults::HOST.to_owned()),
            environment,
            log_level: LogLevel::from_str_or_default(
                &env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned()),
            ),
            auth: AuthConfig::from_env()?,
        })
    }

    /// Validate configuration before serving traffic
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the admin email or password is empty
    /// - the signing secret is missing or a placeholder in production
    pub fn validate(&self) -> AppResult<()> {
        if self.auth.admin_email.trim().is_empty() || self.auth.admin_password.is_empty() {
            return Err(AppError::config(
                "ADMIN_EMAIL and ADMIN_PASSWORD must both be set",
            ));
        }

        if let Some(condition) = self.auth.jwt_secret.insecure_reason() {
            if self.environment.is_production() {
                return Err(AppError::config(format!(
                    "Refusing to serve admin traffic in production: {condition}"
                )));
            }
            warn!(
                environment = %self.environment,
                allow_insecure = self.auth.allow_insecure_secret,
                "{condition}; admin sessions are not trustworthy in this deployment"
            );
        }

        Ok(())
    }

    /// Whether the gate may trust tokens signed with the configured secret
    ///
    /// A secure secret is always trusted. An insecure one only when the operator
    /// opted in and the deployment is not production.
    #[must_use]
    pub fn trusts_signing_secret(&self) -> bool {
        self.auth.jwt_secret.status().is_secure()
            || (self.auth.allow_insecure_secret && !self.environment.is_production())
    }

    /// Whether session cookies carry the `Secure` attribute
    #[must_use]
    pub const fn secure_cookies(&self) -> bool {
        self.environment.is_production()
    }

    /// Get a one-line-per-setting summary without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Inkwell Blog Configuration:\n\
             - Environment: {}\n\
             - Listen: {}:{}\n\
             - Log Level: {}\n\
             - Admin: {}\n\
             - Admin Password: {}\n\
             - Signing Secret: {:?}\n\
             - Secure Cookies: {}",
            self.environment,
            self.host,
            self.http_port,
            self.log_level,
            self.auth.admin_email,
            if self.auth.password_is_hashed() {
                "argon2 hash"
            } else {
                "plain"
            },
            self.auth.jwt_secret.status(),
            self.secure_cookies(),
        )
    }
}
