// ABOUTME: Integration tests for post management behind the admin gate and the public post API
// ABOUTME: Drives create, read, update, delete with a session cookie and checks draft visibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use axum::Router;
use common::{admin_token, create_test_app};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

async fn create_post(app: &Router, token: &str, body: &Value) -> Value {
    AxumTestRequest::post("/api/admin/posts")
        .admin_cookie(token)
        .json(body)
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED)
        .json()
}

#[tokio::test]
async fn test_admin_post_lifecycle() {
    let (app, resources) = create_test_app();
    let token = admin_token(&resources);

    let created = create_post(
        &app,
        &token,
        &json!({
            "title": "Hello, World!",
            "content": "First post",
            "tags": ["Intro", "intro", " rust "],
        }),
    )
    .await;
    assert_eq!(created["slug"], "hello-world");
    assert_eq!(created["published"], false);
    assert_eq!(created["tags"], json!(["intro", "rust"]));
    let id = created["id"].as_str().expect("id").to_owned();

    let fetched: Value = AxumTestRequest::get(&format!("/api/admin/posts/{id}"))
        .admin_cookie(&token)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fetched["title"], "Hello, World!");

    let updated: Value = AxumTestRequest::put(&format!("/api/admin/posts/{id}"))
        .admin_cookie(&token)
        .json(&json!({ "published": true, "summary": "Greetings" }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(updated["published"], true);
    assert_eq!(updated["summary"], "Greetings");
    assert_eq!(updated["title"], "Hello, World!");

    let deleted: Value = AxumTestRequest::delete(&format!("/api/admin/posts/{id}"))
        .admin_cookie(&token)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(deleted, json!({ "message": "Post deleted" }));

    let missing = AxumTestRequest::get(&format!("/api/admin/posts/{id}"))
        .admin_cookie(&token)
        .send(app)
        .await;
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn test_admin_post_api_requires_session() {
    let (app, _) = create_test_app();

    let response = AxumTestRequest::post("/api/admin/posts")
        .json(&json!({ "title": "Sneaky", "content": "Nope" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 401);

    let listing: Value = AxumTestRequest::get("/api/posts").send(app).await.json();
    assert_eq!(listing["total"], 0);
}

#[tokio::test]
async fn test_duplicate_slug_conflicts() {
    let (app, resources) = create_test_app();
    let token = admin_token(&resources);

    create_post(&app, &token, &json!({ "title": "Same", "content": "one" })).await;
    let response = AxumTestRequest::post("/api/admin/posts")
        .admin_cookie(&token)
        .json(&json!({ "title": "Other", "slug": "same", "content": "two" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 409);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "message": "A post with slug 'same' already exists" })
    );
}

#[tokio::test]
async fn test_create_requires_title_and_content() {
    let (app, resources) = create_test_app();
    let token = admin_token(&resources);

    let response = AxumTestRequest::post("/api/admin/posts")
        .admin_cookie(&token)
        .json(&json!({ "title": "No body" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": "Content is required" }));
}

#[tokio::test]
async fn test_invalid_post_id_is_bad_request() {
    let (app, resources) = create_test_app();
    let token = admin_token(&resources);

    let response = AxumTestRequest::get("/api/admin/posts/not-a-uuid")
        .admin_cookie(&token)
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_public_api_hides_drafts() {
    let (app, resources) = create_test_app();
    let token = admin_token(&resources);

    create_post(
        &app,
        &token,
        &json!({ "title": "Live", "content": "visible", "published": true }),
    )
    .await;
    create_post(&app, &token, &json!({ "title": "Draft", "content": "hidden" })).await;

    let listing: Value = AxumTestRequest::get("/api/posts")
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["posts"][0]["slug"], "live");

    let admin_listing: Value = AxumTestRequest::get("/api/admin/posts")
        .admin_cookie(&token)
        .send(app.clone())
        .await
        .json();
    assert_eq!(admin_listing["total"], 2);

    let live = AxumTestRequest::get("/api/posts/live").send(app.clone()).await;
    assert_eq!(live.status(), 200);

    let draft = AxumTestRequest::get("/api/posts/draft").send(app).await;
    assert_eq!(draft.status(), 404);
    let body: Value = draft.json();
    assert_eq!(body, json!({ "message": "Post not found" }));
}

#[tokio::test]
async fn test_admin_posts_page_escapes_titles() {
    let (app, resources) = create_test_app();
    let token = admin_token(&resources);

    create_post(
        &app,
        &token,
        &json!({ "title": "<script>alert(1)</script>", "slug": "xss", "content": "x" }),
    )
    .await;

    let page = AxumTestRequest::get("/admin/posts")
        .admin_cookie(&token)
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .text();
    assert!(!page.contains("<script>alert(1)</script>"));
    assert!(page.contains("&lt;script&gt;"));
}
