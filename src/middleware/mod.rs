// ABOUTME: HTTP middleware for the admin access gate and request tracing
// ABOUTME: The gate wraps every route; tracing supplies the per-request span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

/// Admin session gate
pub mod admin_gate;
/// Request spans for the HTTP trace layer
pub mod tracing;

pub use admin_gate::{admin_gate, AdminGate, GateDecision, GateOutcome, GateState, PathClass};
pub use self::tracing::{create_request_span, make_request_span, record_response};
