// ABOUTME: Integration tests for the public newsletter subscription endpoint
// ABOUTME: Covers success, address validation, duplicate detection, and dashboard counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{admin_token, create_test_app};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

#[tokio::test]
async fn test_subscribe_success() {
    let (app, resources) = create_test_app();

    let response = AxumTestRequest::post("/api/subscribe")
        .json(&json!({ "email": "reader@example.com" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": "Subscribed successfully" }));
    assert_eq!(resources.subscribers.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_subscribe_rejects_malformed_address() {
    let (app, _) = create_test_app();

    for email in ["", "no-at-sign", "a@b", "two@@example.com", "sp ace@example.com"] {
        let response = AxumTestRequest::post("/api/subscribe")
            .json(&json!({ "email": email }))
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 400, "address {email:?}");
    }
}

#[tokio::test]
async fn test_subscribe_duplicate_is_conflict_regardless_of_case() {
    let (app, _) = create_test_app();

    AxumTestRequest::post("/api/subscribe")
        .json(&json!({ "email": "reader@example.com" }))
        .send(app.clone())
        .await;
    let response = AxumTestRequest::post("/api/subscribe")
        .json(&json!({ "email": " Reader@Example.com " }))
        .send(app)
        .await;

    assert_eq!(response.status(), 409);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": "Email is already subscribed" }));
}

#[tokio::test]
async fn test_dashboard_reports_subscriber_count() {
    let (app, resources) = create_test_app();
    let token = admin_token(&resources);

    for email in ["one@example.com", "two@example.com"] {
        AxumTestRequest::post("/api/subscribe")
            .json(&json!({ "email": email }))
            .send(app.clone())
            .await;
    }

    let page = AxumTestRequest::get("/admin")
        .admin_cookie(&token)
        .send(app)
        .await
        .text();
    assert!(page.contains("Subscribers: 2"));
}
