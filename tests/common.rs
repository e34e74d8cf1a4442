// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds configured server resources, the full router, and signed session cookies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `inkwell_blog`

use axum::Router;
use chrono::{DateTime, Utc};
use inkwell_blog::admin::Role;
use inkwell_blog::config::{AuthConfig, Environment, LogLevel, ServerConfig, SigningSecret};
use inkwell_blog::server::{BlogServer, ServerResources};
use std::env;
use tracing::Level;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Configured admin identity used across tests
pub const ADMIN_EMAIL: &str = "admin@site.com";
/// Configured admin password used across tests
pub const ADMIN_PASSWORD: &str = "correct";
/// A signing secret that is neither missing nor a placeholder
pub const TEST_SECRET: &str = "integration-test-signing-secret-9f8e7d6c5b4a";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = env::var("TEST_LOG").map_or(Level::WARN, |value| {
            LogLevel::from_str_or_default(&value).to_tracing_level()
        });

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration for tests; `secret` of `None` means `JWT_SECRET` is unset
pub fn test_config(environment: Environment, secret: Option<&str>) -> ServerConfig {
    ServerConfig {
        http_port: 0,
        host: "127.0.0.1".to_owned(),
        environment,
        log_level: LogLevel::Warn,
        auth: AuthConfig {
            admin_email: ADMIN_EMAIL.to_owned(),
            admin_password: ADMIN_PASSWORD.to_owned(),
            jwt_secret: SigningSecret::new(secret.map(str::to_owned)),
            allow_insecure_secret: false,
        },
    }
}

/// Resources and router built from `config`
pub fn create_test_app_with(config: ServerConfig) -> (Router, Arc<ServerResources>) {
    init_test_logging();
    let resources = Arc::new(ServerResources::new(config));
    let router = BlogServer::new(resources.clone()).router();
    (router, resources)
}

/// Resources and router with a trusted secret in the testing environment
pub fn create_test_app() -> (Router, Arc<ServerResources>) {
    create_test_app_with(test_config(Environment::Testing, Some(TEST_SECRET)))
}

/// A valid admin session token, issued now
pub fn admin_token(resources: &ServerResources) -> String {
    resources
        .authenticator
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .expect("admin login")
        .token
}

/// A token signed with the server's key for any role and issue time
pub fn token_for(resources: &ServerResources, role: Role, issued_at: DateTime<Utc>) -> String {
    resources
        .authenticator
        .tokens()
        .issue_at(ADMIN_EMAIL, role, issued_at)
        .expect("issue token")
        .token
}
