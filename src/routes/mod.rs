// ABOUTME: Route module organization for the blog's HTTP endpoints
// ABOUTME: Assembles domain routers behind the admin gate, tracing, request-id, and security headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! Route module for Inkwell Blog
//!
//! Each domain module owns its route definitions and thin handlers. The admin
//! gate is applied once here, over every route and the fallback, so handlers
//! under `/admin` and `/api/admin` never check sessions themselves.

/// Admin login and logout API
pub mod admin_auth;
/// Server-rendered admin pages
pub mod admin_pages;
/// Health check and readiness routes
pub mod health;
/// Post routes, admin CRUD and public reads
pub mod posts;
/// Newsletter subscription route
pub mod subscribers;

pub use admin_auth::{AdminAuthRoutes, LoginRequest, LoginResponse};
pub use admin_pages::AdminPageRoutes;
pub use health::HealthRoutes;
pub use posts::PostRoutes;
pub use subscribers::SubscriberRoutes;

use crate::constants::headers::REQUEST_ID;
use crate::errors::{AppError, AppResult};
use crate::middleware::{admin_gate, make_request_span, record_response};
use crate::security::{apply_security_headers, SecurityHeaders};
use crate::server::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderName;
use axum::{middleware, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// `{message}` body for successful operations without a payload
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Build the complete application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID);
    let security_headers = Arc::new(SecurityHeaders::for_environment(
        resources.config.environment,
    ));

    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(AdminAuthRoutes::routes(resources.clone()))
        .merge(AdminPageRoutes::routes(resources.clone()))
        .merge(PostRoutes::routes(resources.clone()))
        .merge(SubscriberRoutes::routes(resources.clone()))
        // Must be registered before the gate layer so unknown admin paths are gated too
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            resources.gate.clone(),
            admin_gate,
        ))
        .layer(middleware::from_fn_with_state(
            security_headers,
            apply_security_headers,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(record_response),
        )
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

async fn not_found() -> AppError {
    AppError::not_found("Route")
}

/// Unwrap a JSON body, turning extractor rejections into a 400 `{message}`
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}
