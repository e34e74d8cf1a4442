// ABOUTME: Application constants grouped by domain: session cookie, gated paths, and defaults
// ABOUTME: Single source for literal values shared by the issuer, the gate, and the routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Service identity used in logs
pub mod service_names {
    /// Name reported by the logging layer
    pub const INKWELL_BLOG: &str = "inkwell-blog";
}

/// Admin session cookie and token lifetime
pub mod session {
    /// Name of the browser-held admin session cookie
    pub const COOKIE_NAME: &str = "adminToken";

    /// Session lifetime in hours
    pub const TTL_HOURS: i64 = 24;

    /// Session lifetime in seconds, used for the cookie `Max-Age`
    pub const TTL_SECONDS: i64 = TTL_HOURS * 3600;

    /// Expiry written when the cookie is cleared
    pub const EPOCH_EXPIRES: &str = "Thu, 01 Jan 1970 00:00:00 GMT";
}

/// Path prefixes and literals the access gate classifies on
pub mod paths {
    /// Prefix of the credential endpoints; never gated
    pub const OPEN_AUTH_API_PREFIX: &str = "/api/adminauth";

    /// Prefix of admin-only JSON endpoints
    pub const PROTECTED_API_PREFIX: &str = "/api/admin";

    /// Prefix of admin-only pages
    pub const PROTECTED_PAGE_PREFIX: &str = "/admin";

    /// The admin login page
    pub const LOGIN_PAGE: &str = "/adminauth";

    /// Landing page for an authenticated admin
    pub const ADMIN_LANDING: &str = "/admin";
}

/// Signing secret defaults and known placeholders
pub mod secrets {
    /// Secret used when `JWT_SECRET` is absent; always classified insecure
    pub const FALLBACK_SECRET: &str = "your-secret-key";

    /// Values copied from templates and tutorials that must never sign production tokens
    pub const KNOWN_PLACEHOLDERS: &[&str] = &[
        "your-secret-key",
        "your_secret_key",
        "your-jwt-secret",
        "your_jwt_secret",
        "secret",
        "changeme",
        "change-me",
        "jwt_secret",
    ];

    /// Length of secrets produced by `--generate-secret`
    pub const GENERATED_SECRET_LENGTH: usize = 64;
}

/// Server defaults
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 3000;

    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
}

/// HTTP header names
pub mod headers {
    /// Correlation id set on each request and echoed on the response
    pub const REQUEST_ID: &str = "x-request-id";
}
