// ABOUTME: Browser-facing security: session cookie handling and response security headers
// ABOUTME: Header policy differs per environment; HSTS is only sent in production
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! # Security Headers
//!
//! Admin pages are server-rendered HTML, so every response carries a small
//! set of hardening headers. Headers a handler already set are left alone.

/// `adminToken` cookie parsing and `Set-Cookie` construction
pub mod cookies;

use crate::config::Environment;
use axum::extract::{Request, State};
use axum::http::header::{
    CONTENT_SECURITY_POLICY, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS,
    X_FRAME_OPTIONS,
};
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

/// Security header values applied to every response
#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    /// Content-Security-Policy
    pub csp: &'static str,
    /// X-Frame-Options
    pub frame_options: &'static str,
    /// X-Content-Type-Options
    pub content_type_options: &'static str,
    /// Referrer-Policy
    pub referrer_policy: &'static str,
    /// Strict-Transport-Security (HTTPS deployments only)
    pub hsts: Option<&'static str>,
}

impl SecurityHeaders {
    /// Header policy for the given deployment environment
    #[must_use]
    pub const fn for_environment(environment: Environment) -> Self {
        let hsts = if environment.is_production() {
            Some("max-age=31536000; includeSubDomains")
        } else {
            None
        };

        Self {
            csp: "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; frame-ancestors 'none'; object-src 'none'; base-uri 'self'",
            frame_options: "DENY",
            content_type_options: "nosniff",
            referrer_policy: "strict-origin-when-cross-origin",
            hsts,
        }
    }

    fn entries(&self) -> Vec<(HeaderName, &'static str)> {
        let mut entries = vec![
            (CONTENT_SECURITY_POLICY, self.csp),
            (X_FRAME_OPTIONS, self.frame_options),
            (X_CONTENT_TYPE_OPTIONS, self.content_type_options),
            (REFERRER_POLICY, self.referrer_policy),
        ];
        if let Some(hsts) = self.hsts {
            entries.push((STRICT_TRANSPORT_SECURITY, hsts));
        }
        entries
    }
}

/// Middleware adding the configured security headers to each response
pub async fn apply_security_headers(
    State(headers): State<Arc<SecurityHeaders>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let response_headers = response.headers_mut();
    for (name, value) in headers.entries() {
        if !response_headers.contains_key(&name) {
            response_headers.insert(name, HeaderValue::from_static(value));
        }
    }
    response
}
