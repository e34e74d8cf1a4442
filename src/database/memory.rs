// ABOUTME: In-memory post and subscriber stores built on DashMap
// ABOUTME: Slug and email uniqueness are enforced atomically through secondary index maps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

use super::{PostStore, SubscriberStore};
use crate::errors::{AppError, AppResult};
use crate::models::{Post, Subscriber};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::cmp::Reverse;
use tracing::debug;
use uuid::Uuid;

/// Posts held in process memory; contents are lost on restart
#[derive(Debug, Default)]
pub struct InMemoryPostStore {
    posts: DashMap<Uuid, Post>,
    slugs: DashMap<String, Uuid>,
}

impl InMemoryPostStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slug_taken(slug: &str) -> AppError {
        AppError::already_exists(format!("A post with slug '{slug}' already exists"))
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn create(&self, post: Post) -> AppResult<Post> {
        match self.slugs.entry(post.slug.clone()) {
            Entry::Occupied(_) => return Err(Self::slug_taken(&post.slug)),
            Entry::Vacant(entry) => {
                entry.insert(post.id);
            }
        }
        self.posts.insert(post.id, post.clone());
        debug!(post_id = %post.id, slug = %post.slug, "Post created");
        Ok(post)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Post>> {
        Ok(self.posts.get(&id).map(|post| post.value().clone()))
    }

    async fn get_by_slug(&self, slug: &str) -> AppResult<Option<Post>> {
        let Some(id) = self.slugs.get(slug).map(|id| *id.value()) else {
            return Ok(None);
        };
        self.get(id).await
    }

    async fn list(&self, include_drafts: bool) -> AppResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|post| include_drafts || post.published)
            .map(|post| post.value().clone())
            .collect();
        posts.sort_by_key(|post| (Reverse(post.created_at), post.id));
        Ok(posts)
    }

    async fn update(&self, post: Post) -> AppResult<Post> {
        let previous_slug = self
            .posts
            .get(&post.id)
            .map(|existing| existing.slug.clone())
            .ok_or_else(|| AppError::not_found("Post"))?;

        if previous_slug != post.slug {
            match self.slugs.entry(post.slug.clone()) {
                Entry::Occupied(entry) if *entry.get() != post.id => {
                    return Err(Self::slug_taken(&post.slug));
                }
                Entry::Occupied(_) => {}
                Entry::Vacant(entry) => {
                    entry.insert(post.id);
                }
            }
            self.slugs.remove_if(&previous_slug, |_, id| *id == post.id);
        }

        self.posts.insert(post.id, post.clone());
        debug!(post_id = %post.id, "Post updated");
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let Some((_, post)) = self.posts.remove(&id) else {
            return Ok(false);
        };
        self.slugs.remove_if(&post.slug, |_, owner| *owner == id);
        debug!(post_id = %id, "Post deleted");
        Ok(true)
    }
}

/// Subscribers held in process memory, keyed by normalized email
#[derive(Debug, Default)]
pub struct InMemorySubscriberStore {
    subscribers: DashMap<String, Subscriber>,
}

impl InMemorySubscriberStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriberStore for InMemorySubscriberStore {
    async fn add(&self, subscriber: Subscriber) -> AppResult<Subscriber> {
        match self.subscribers.entry(subscriber.email.clone()) {
            Entry::Occupied(_) => Err(AppError::already_exists("Email is already subscribed")),
            Entry::Vacant(entry) => {
                entry.insert(subscriber.clone());
                Ok(subscriber)
            }
        }
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.subscribers.len())
    }
}
