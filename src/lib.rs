// ABOUTME: Main library entry point for the Inkwell blog server
// ABOUTME: Exposes the admin session system, access gate, storage, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

#![deny(unsafe_code)]

//! # Inkwell Blog
//!
//! A personal blog server with a single-admin panel. The admin signs in once
//! and receives a signed, 24-hour session token in an `HttpOnly` cookie; an
//! access gate in front of every route decides whether `/admin` pages and the
//! `/api/admin` API may be reached.
//!
//! ## Architecture
//!
//! - **Admin**: credential check, HS256 session tokens, claims and auth errors
//! - **Middleware**: the access gate and request tracing
//! - **Routes**: login/logout API, admin pages, posts, subscriptions, health
//! - **Database**: storage traits with in-memory implementations
//! - **Config**: environment-driven configuration, validated once at startup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use inkwell_blog::config::environment::ServerConfig;
//! use inkwell_blog::errors::AppResult;
//! use inkwell_blog::server::{BlogServer, ServerResources};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     config.validate()?;
//!     let port = config.http_port;
//!
//!     let resources = Arc::new(ServerResources::new(config));
//!     BlogServer::new(resources).run(port).await
//! }
//! ```

/// Admin session system: credentials, tokens, claims
pub mod admin;

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Storage traits and in-memory backends
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware: access gate and tracing
pub mod middleware;

/// Blog data models
pub mod models;

/// HTTP routes
pub mod routes;

/// Session cookies and security headers
pub mod security;

/// Server assembly and lifecycle
pub mod server;

/// Shared utilities
pub mod utils;
