// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Groups environment loading, admin/secret settings, and shared config enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! Configuration module
//!
//! - **Environment**: `ServerConfig` loaded once from environment variables
//! - **Security**: admin credentials and signing-secret classification
//! - **Types**: `Environment` and `LogLevel`

/// Environment and server configuration
pub mod environment;
/// Admin credentials and signing secret
pub mod security;
/// Shared configuration enums
pub mod types;

pub use environment::ServerConfig;
pub use security::{AuthConfig, SecretStatus, SigningSecret};
pub use types::{Environment, LogLevel};
