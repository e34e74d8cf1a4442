// ABOUTME: Core data models for the blog: posts, post requests, and newsletter subscribers
// ABOUTME: Validation of user-supplied fields lives next to the types it guards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! # Data Models
//!
//! - `Post`: a blog article, draft or published
//! - `CreatePostRequest` / `UpdatePostRequest`: admin API payloads
//! - `Subscriber`: a newsletter address

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier
    pub id: Uuid,
    /// Headline
    pub title: String,
    /// URL path segment, unique across posts
    pub slug: String,
    /// Short teaser shown in listings
    pub summary: String,
    /// Body (markdown)
    pub content: String,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Drafts are only visible through the admin API
    pub published: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Build a new post from an admin request
    ///
    /// # Errors
    ///
    /// Returns an error if the title or content is empty, or no usable slug
    /// can be derived
    pub fn from_request(request: CreatePostRequest, now: DateTime<Utc>) -> AppResult<Self> {
        let title = required(&request.title, "Title")?;
        let content = required(&request.content, "Content")?;
        let slug = match request.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slugify(slug)?,
            _ => slugify(&title)?,
        };

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            slug,
            summary: request.summary.unwrap_or_default().trim().to_owned(),
            content,
            tags: normalize_tags(request.tags),
            published: request.published,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Payload for `POST /api/admin/posts`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    /// Headline (required)
    pub title: String,
    /// Explicit slug; derived from the title when absent
    pub slug: Option<String>,
    /// Short teaser
    pub summary: Option<String>,
    /// Body (required)
    pub content: String,
    /// Tags
    pub tags: Vec<String>,
    /// Publish immediately
    pub published: bool,
}

/// Payload for `PUT /api/admin/posts/:id`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePostRequest {
    /// New headline
    pub title: Option<String>,
    /// New slug
    pub slug: Option<String>,
    /// New teaser
    pub summary: Option<String>,
    /// New body
    pub content: Option<String>,
    /// Replacement tag list
    pub tags: Option<Vec<String>>,
    /// Publish or unpublish
    pub published: Option<bool>,
}

impl UpdatePostRequest {
    /// Apply the changes to `post`, leaving it untouched on error
    ///
    /// # Errors
    ///
    /// Returns an error if a supplied title, content, or slug is empty
    pub fn apply_to(self, post: &Post, now: DateTime<Utc>) -> AppResult<Post> {
        let mut updated = post.clone();
        if let Some(title) = self.title {
            updated.title = required(&title, "Title")?;
        }
        if let Some(slug) = self.slug {
            updated.slug = slugify(&slug)?;
        }
        if let Some(summary) = self.summary {
            updated.summary = summary.trim().to_owned();
        }
        if let Some(content) = self.content {
            updated.content = required(&content, "Content")?;
        }
        if let Some(tags) = self.tags {
            updated.tags = normalize_tags(tags);
        }
        if let Some(published) = self.published {
            updated.published = published;
        }
        updated.updated_at = now;
        Ok(updated)
    }
}

/// A newsletter subscriber
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Unique identifier
    pub id: Uuid,
    /// Normalized (trimmed, lowercase) address
    pub email: String,
    /// When the address was added
    pub subscribed_at: DateTime<Utc>,
}

impl Subscriber {
    /// Validate and normalize an address into a new subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not shaped like `local@domain.tld`
    pub fn new(email: &str, now: DateTime<Utc>) -> AppResult<Self> {
        let email = email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(AppError::invalid_input("A valid email address is required"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            email,
            subscribed_at: now,
        })
    }
}

/// Convert text into a URL slug: lowercase ASCII letters and digits joined by `-`
///
/// # Errors
///
/// Returns an error if the text contains no ASCII letters or digits
pub fn slugify(text: &str) -> AppResult<String> {
    let slug = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        return Err(AppError::invalid_input(
            "Slug must contain at least one letter or digit",
        ));
    }
    Ok(slug)
}

/// Structural email check: one `@`, non-empty local part, dotted domain, no whitespace
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

fn required(value: &str, field: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::missing_field(format!("{field} is required")));
    }
    Ok(value.to_owned())
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!").unwrap(), "hello-world");
        assert_eq!(slugify("  Rust   2024 -- notes ").unwrap(), "rust-2024-notes");
        assert_eq!(slugify("already-a-slug").unwrap(), "already-a-slug");
        assert!(slugify("¡¿!?").is_err());
    }

    #[test]
    fn test_post_from_request_derives_slug() {
        let request = CreatePostRequest {
            title: "  First Post ".to_owned(),
            content: "Body".to_owned(),
            tags: vec!["Rust".to_owned(), "rust".to_owned(), " ".to_owned()],
            ..CreatePostRequest::default()
        };
        let post = Post::from_request(request, Utc::now()).unwrap();
        assert_eq!(post.title, "First Post");
        assert_eq!(post.slug, "first-post");
        assert_eq!(post.tags, vec!["rust".to_owned()]);
        assert!(!post.published);
    }

    #[test]
    fn test_post_requires_title_and_content() {
        let error = Post::from_request(
            CreatePostRequest {
                title: "Title".to_owned(),
                ..CreatePostRequest::default()
            },
            Utc::now(),
        )
        .unwrap_err();
        assert_eq!(error.http_status(), 400);
        assert_eq!(error.message, "Content is required");
    }

    #[test]
    fn test_update_is_partial() {
        let created = Utc::now();
        let post = Post::from_request(
            CreatePostRequest {
                title: "Title".to_owned(),
                content: "Body".to_owned(),
                ..CreatePostRequest::default()
            },
            created,
        )
        .unwrap();

        let update = UpdatePostRequest {
            published: Some(true),
            ..UpdatePostRequest::default()
        };
        let updated = update.apply_to(&post, created).unwrap();
        assert!(updated.published);
        assert_eq!(updated.title, post.title);
        assert_eq!(updated.slug, post.slug);

        let bad = UpdatePostRequest {
            title: Some("   ".to_owned()),
            ..UpdatePostRequest::default()
        };
        assert!(bad.apply_to(&post, created).is_err());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("reader@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("reader@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("reader@@example.com"));
        assert!(!is_valid_email("reader@.com"));
        assert!(!is_valid_email("read er@example.com"));
        assert!(!is_valid_email("reader.example.com"));
    }

    #[test]
    fn test_subscriber_normalizes_email() {
        let subscriber = Subscriber::new("  Reader@Example.COM ", Utc::now()).unwrap();
        assert_eq!(subscriber.email, "reader@example.com");
        assert!(Subscriber::new("nope", Utc::now()).is_err());
    }
}
