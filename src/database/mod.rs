// ABOUTME: Storage abstraction for posts and newsletter subscribers
// ABOUTME: Async traits so handlers stay independent of the backing store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! # Storage
//!
//! Handlers talk to [`PostStore`] and [`SubscriberStore`] through `Arc<dyn ..>`.
//! The shipped backend is in-memory; a persistent backend implements the same
//! traits.

/// `DashMap`-backed stores
pub mod memory;

use crate::errors::AppResult;
use crate::models::{Post, Subscriber};
use async_trait::async_trait;
use uuid::Uuid;

pub use memory::{InMemoryPostStore, InMemorySubscriberStore};

/// Persistence for blog posts
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` if the slug is taken
    async fn create(&self, post: Post) -> AppResult<Post>;

    /// Look up a post by id
    async fn get(&self, id: Uuid) -> AppResult<Option<Post>>;

    /// Look up a post by slug
    async fn get_by_slug(&self, slug: &str) -> AppResult<Option<Post>>;

    /// All posts, newest first; drafts only when `include_drafts`
    async fn list(&self, include_drafts: bool) -> AppResult<Vec<Post>>;

    /// Replace a stored post
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if the id is unknown and
    /// `RESOURCE_ALREADY_EXISTS` if the new slug belongs to another post
    async fn update(&self, post: Post) -> AppResult<Post>;

    /// Remove a post, returning whether it existed
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Persistence for newsletter subscribers
#[async_trait]
pub trait SubscriberStore: Send + Sync {
    /// Add a subscriber
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` if the address is already subscribed
    async fn add(&self, subscriber: Subscriber) -> AppResult<Subscriber>;

    /// Number of subscribers
    async fn count(&self) -> AppResult<usize>;
}
