// ABOUTME: Logging configuration and structured logging setup for the blog server
// ABOUTME: Installs a tracing-subscriber registry with noise filtering and a selectable output format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! Structured logging configuration
//!
//! `RUST_LOG` wins when set; otherwise the filter is built from the server's
//! `LOG_LEVEL`. Production defaults to JSON output with source locations.

use crate::config::{Environment, LogLevel, ServerConfig};
use crate::constants::service_names;
use anyhow::{anyhow, Result};
use serde_json::json;
use std::env;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string, e.g. `info` or `inkwell_blog=debug,tower_http=warn`
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default().to_string(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::INKWELL_BLOG.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Logging configuration for a loaded server configuration
    ///
    /// Output shape comes from `LOG_FORMAT`, `LOG_INCLUDE_LOCATION`,
    /// `LOG_INCLUDE_THREAD`, and `LOG_INCLUDE_SPANS`.
    #[must_use]
    pub fn for_server(config: &ServerConfig) -> Self {
        Self::build(config.environment, config.log_level)
    }

    fn build(environment: Environment, log_level: LogLevel) -> Self {
        let is_production = environment.is_production();
        let default_format = if is_production {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        };

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
            format: env::var("LOG_FORMAT")
                .map_or(default_format, |value| LogFormat::from_str_or_default(&value)),
            include_location: is_production || env_flag("LOG_INCLUDE_LOCATION"),
            include_thread: env_flag("LOG_INCLUDE_THREAD"),
            include_spans: env_flag("LOG_INCLUDE_SPANS"),
            service_name: service_names::INKWELL_BLOG.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Build the env filter: the configured level plus fixed noise reduction
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let mut filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .parse_lossy(&self.level);

        for directive in ["hyper=warn", "h2=warn", "tower_http=info", "tower=warn"] {
            if let Ok(directive) = directive.parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }
        filter
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stdout)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Inkwell Blog starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Logging configured: {config_summary}");
    }
}

/// Initialize logging for a loaded server configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_for_server(config: &ServerConfig) -> Result<()> {
    LoggingConfig::for_server(config).init()
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log admin authentication events
    pub fn log_auth_event(subject: &str, event: &str, success: bool) {
        info!(
            auth.subject = %subject,
            auth.event = %event,
            auth.success = success,
            "Authentication event"
        );
    }

    /// Log security events
    pub fn log_security_event(event_type: &str, severity: &str, details: &str) {
        warn!(
            security.event = %event_type,
            security.severity = %severity,
            security.details = %details,
            "Security event"
        );
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).is_ok_and(|value| !matches!(value.as_str(), "" | "0" | "false"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_production_defaults_to_json() {
        let config = LoggingConfig::build(Environment::Production, LogLevel::Warn);
        if env::var("LOG_FORMAT").is_err() {
            assert_eq!(config.format, LogFormat::Json);
        }
        assert!(config.include_location);
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_invalid_level_does_not_panic() {
        let config = LoggingConfig {
            level: "not a [directive".into(),
            ..LoggingConfig::default()
        };
        let _filter = config.env_filter();
    }
}
