// ABOUTME: Post routes: admin CRUD under /api/admin/posts and public reads under /api/posts
// ABOUTME: Public routes only ever expose published posts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

use crate::errors::{AppError, AppResult};
use crate::models::{CreatePostRequest, Post, UpdatePostRequest};
use crate::routes::{json_body, MessageResponse};
use crate::server::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// List envelope
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    /// Posts, newest first
    pub posts: Vec<Post>,
    /// Number of posts returned
    pub total: usize,
}

impl From<Vec<Post>> for PostListResponse {
    fn from(posts: Vec<Post>) -> Self {
        Self {
            total: posts.len(),
            posts,
        }
    }
}

/// Post routes
pub struct PostRoutes;

impl PostRoutes {
    /// Create admin and public post routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/admin/posts",
                get(Self::handle_admin_list).post(Self::handle_create),
            )
            .route(
                "/api/admin/posts/:id",
                get(Self::handle_admin_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route("/api/posts", get(Self::handle_public_list))
            .route("/api/posts/:slug", get(Self::handle_public_get))
            .with_state(resources)
    }

    async fn handle_admin_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<PostListResponse>> {
        let posts = resources.posts.list(true).await?;
        Ok(Json(posts.into()))
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<CreatePostRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let post = Post::from_request(json_body(payload)?, Utc::now())?;
        let created = resources.posts.create(post).await?;
        info!(post_id = %created.id, slug = %created.slug, "Post created");
        Ok((StatusCode::CREATED, Json(created)).into_response())
    }

    async fn handle_admin_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> AppResult<Json<Post>> {
        let id = parse_post_id(&id)?;
        let post = resources
            .posts
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post"))?;
        Ok(Json(post))
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        payload: Result<Json<UpdatePostRequest>, JsonRejection>,
    ) -> AppResult<Json<Post>> {
        let id = parse_post_id(&id)?;
        let update = json_body(payload)?;
        let existing = resources
            .posts
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post"))?;

        let updated = resources
            .posts
            .update(update.apply_to(&existing, Utc::now())?)
            .await?;
        info!(post_id = %updated.id, "Post updated");
        Ok(Json(updated))
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> AppResult<Json<MessageResponse>> {
        let id = parse_post_id(&id)?;
        if !resources.posts.delete(id).await? {
            return Err(AppError::not_found("Post"));
        }
        info!(post_id = %id, "Post deleted");
        Ok(MessageResponse::new("Post deleted"))
    }

    async fn handle_public_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<PostListResponse>> {
        let posts = resources.posts.list(false).await?;
        Ok(Json(posts.into()))
    }

    async fn handle_public_get(
        State(resources): State<Arc<ServerResources>>,
        Path(slug): Path<String>,
    ) -> AppResult<Json<Post>> {
        resources
            .posts
            .get_by_slug(&slug)
            .await?
            .filter(|post| post.published)
            .map(Json)
            .ok_or_else(|| AppError::not_found("Post"))
    }
}

fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::invalid_input(format!("Invalid post id: {raw}")))
}
