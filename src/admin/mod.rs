// ABOUTME: Admin session system module organization and exports
// ABOUTME: Credential check, HS256 session tokens, and the claims/error types they share
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! Admin Session System
//!
//! The blog has a single admin. A successful login yields a signed session token
//! stored in the `adminToken` cookie; the access gate verifies it on every
//! request to an admin path.

/// Admin credential check and session issuance
pub mod auth;
/// JWT session token generation and validation
pub mod jwt;
/// Claims, roles, and auth errors
pub mod models;

pub use auth::{hash_password, AdminAuthenticator};
pub use jwt::SessionTokenManager;
pub use models::{AdminSession, AuthError, IssuedSession, Role, SessionClaims};
