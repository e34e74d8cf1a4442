// ABOUTME: Newsletter subscription endpoint
// ABOUTME: Validates the address shape and rejects duplicates with 409
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

use crate::errors::AppResult;
use crate::models::Subscriber;
use crate::routes::{json_body, MessageResponse};
use crate::server::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Subscription request payload
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubscribeRequest {
    /// Address to subscribe
    pub email: String,
}

/// Subscriber routes
pub struct SubscriberRoutes;

impl SubscriberRoutes {
    /// Create the subscription route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/subscribe", post(Self::handle_subscribe))
            .with_state(resources)
    }

    async fn handle_subscribe(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<SubscribeRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let request = json_body(payload)?;
        let subscriber = resources
            .subscribers
            .add(Subscriber::new(&request.email, Utc::now())?)
            .await?;
        info!(subscriber_id = %subscriber.id, "Subscriber added");
        Ok((
            StatusCode::CREATED,
            MessageResponse::new("Subscribed successfully"),
        )
            .into_response())
    }
}
