// ABOUTME: Admin credential endpoints: login sets the session cookie, logout clears it
// ABOUTME: Lives under /api/adminauth, which the access gate never blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

use crate::admin::Role;
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::routes::{json_body, MessageResponse};
use crate::security::cookies::{clear_session_cookie, session_cookie};
use crate::server::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Login request payload
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    /// Admin email
    pub email: String,
    /// Admin password
    pub password: String,
}

/// Login response body; the token itself only travels in the cookie
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Outcome message
    pub message: String,
    /// Role granted to the session
    pub role: Role,
}

/// Admin authentication routes
pub struct AdminAuthRoutes;

impl AdminAuthRoutes {
    /// Create the login and logout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/adminauth/login", post(Self::handle_login))
            .route("/api/adminauth/Logout", post(Self::handle_logout))
            .route("/api/adminauth/logout", post(Self::handle_logout))
            .with_state(resources)
    }

    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<LoginRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let request = json_body(payload)?;
        let issued = match resources
            .authenticator
            .login(&request.email, &request.password)
        {
            Ok(issued) => issued,
            Err(error) => {
                AppLogger::log_auth_event(request.email.trim(), "login", false);
                return Err(error);
            }
        };
        AppLogger::log_auth_event(&issued.claims.sub, "login", true);

        let cookie = session_cookie(&issued.token, resources.config.secure_cookies());
        Ok((
            AppendHeaders([(SET_COOKIE, cookie)]),
            Json(LoginResponse {
                message: "Login successful".to_owned(),
                role: issued.claims.role,
            }),
        )
            .into_response())
    }

    async fn handle_logout(State(resources): State<Arc<ServerResources>>) -> Response {
        AppLogger::log_auth_event("admin", "logout", true);
        (
            AppendHeaders([(
                SET_COOKIE,
                clear_session_cookie(resources.config.secure_cookies()),
            )]),
            MessageResponse::new("Logout successful"),
        )
            .into_response()
    }
}
