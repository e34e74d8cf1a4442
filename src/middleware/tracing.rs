// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds the per-request span used by the HTTP trace layer and records outcome fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

use crate::constants::headers::REQUEST_ID;
use axum::body::Body;
use axum::http::{Request, Response};
use std::time::Duration;
use tracing::field::Empty;
use tracing::{info, Span};

/// Create a tracing span for HTTP requests
#[must_use]
pub fn create_request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = Empty,
        gate_state = Empty,
        status_code = Empty,
        duration_ms = Empty,
    )
}

/// Span factory for the HTTP trace layer
///
/// The request id is already present because `SetRequestIdLayer` runs first.
#[must_use]
pub fn make_request_span(request: &Request<Body>) -> Span {
    let span = create_request_span(request.method().as_str(), request.uri().path());
    if let Some(request_id) = request
        .headers()
        .get(REQUEST_ID)
        .and_then(|value| value.to_str().ok())
    {
        span.record("request_id", request_id);
    }
    span
}

/// Record status and latency once the response is ready
pub fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    let duration_ms = latency.as_millis() as u64;
    span.record("status_code", response.status().as_u16());
    span.record("duration_ms", duration_ms);
    info!(
        status = response.status().as_u16(),
        duration_ms, "Request completed"
    );
}
