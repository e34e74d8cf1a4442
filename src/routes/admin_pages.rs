// ABOUTME: Server-rendered admin pages: login form, dashboard, and post index
// ABOUTME: Pages under /admin rely on the access gate; the login page is reachable without a session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! Admin HTML pages
//!
//! All interpolated values go through the HTML escaping helpers.

use crate::admin::AdminSession;
use crate::errors::AppResult;
use crate::server::ServerResources;
use crate::utils::html::{escape_html_attribute, escape_html_text};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Extension, Router};
use std::fmt::Write;
use std::sync::Arc;

const LOGIN_SCRIPT: &str = r"
document.getElementById('login-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const form = event.target;
  const error = document.getElementById('login-error');
  error.textContent = '';
  const response = await fetch('/api/adminauth/login', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    credentials: 'same-origin',
    body: JSON.stringify({ email: form.email.value, password: form.password.value }),
  });
  if (response.ok) {
    window.location.assign('/admin');
    return;
  }
  const body = await response.json().catch(() => ({}));
  error.textContent = body.message || 'Login failed';
});
";

const LOGOUT_SCRIPT: &str = r"
document.getElementById('logout').addEventListener('click', async () => {
  await fetch('/api/adminauth/Logout', { method: 'POST', credentials: 'same-origin' });
  window.location.assign('/adminauth');
});
";

/// Admin page routes
pub struct AdminPageRoutes;

impl AdminPageRoutes {
    /// Create the login page and the gated admin pages
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/adminauth", get(Self::handle_login_page))
            .route("/adminauth/", get(Self::handle_login_page))
            .route("/admin", get(Self::handle_dashboard))
            .route("/admin/", get(Self::handle_dashboard))
            .route("/admin/posts", get(Self::handle_posts_page))
            .with_state(resources)
    }

    async fn handle_login_page() -> Html<String> {
        let body = format!(
            r#"<h1>Admin sign in</h1>
<form id="login-form">
  <label>Email <input type="email" name="email" autocomplete="username" required></label>
  <label>Password <input type="password" name="password" autocomplete="current-password" required></label>
  <button type="submit">Sign in</button>
</form>
<p id="login-error" role="alert"></p>
<script>{LOGIN_SCRIPT}</script>"#
        );
        Html(layout("Admin sign in", &body))
    }

    async fn handle_dashboard(
        State(resources): State<Arc<ServerResources>>,
        session: Option<Extension<AdminSession>>,
    ) -> AppResult<Html<String>> {
        let posts = resources.posts.list(true).await?;
        let published = posts.iter().filter(|post| post.published).count();
        let subscribers = resources.subscribers.count().await?;

        let greeting = session.map_or_else(
            || "Welcome back".to_owned(),
            |Extension(session)| format!("Signed in as {}", escape_html_text(&session.subject)),
        );

        let body = format!(
            r#"<h1>Dashboard</h1>
<p>{greeting}</p>
<ul>
  <li>Published posts: {published}</li>
  <li>Drafts: {drafts}</li>
  <li>Subscribers: {subscribers}</li>
</ul>
<p><a href="/admin/posts">Manage posts</a></p>
<button id="logout" type="button">Sign out</button>
<script>{LOGOUT_SCRIPT}</script>"#,
            drafts = posts.len() - published,
        );
        Ok(Html(layout("Dashboard", &body)))
    }

    async fn handle_posts_page(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Html<String>> {
        let posts = resources.posts.list(true).await?;

        let mut rows = String::new();
        for post in &posts {
            let _ = write!(
                rows,
                r#"<tr data-id="{id}"><td>{title}</td><td><code>{slug}</code></td><td>{status}</td><td>{updated}</td></tr>"#,
                id = escape_html_attribute(&post.id.to_string()),
                title = escape_html_text(&post.title),
                slug = escape_html_text(&post.slug),
                status = if post.published { "published" } else { "draft" },
                updated = post.updated_at.format("%Y-%m-%d %H:%M"),
            );
        }
        if posts.is_empty() {
            rows.push_str(r#"<tr><td colspan="4">No posts yet</td></tr>"#);
        }

        let body = format!(
            r#"<h1>Posts</h1>
<p><a href="/admin">Back to dashboard</a></p>
<table>
  <thead><tr><th>Title</th><th>Slug</th><th>Status</th><th>Updated</th></tr></thead>
  <tbody>{rows}</tbody>
</table>"#
        );
        Ok(Html(layout("Posts", &body)))
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Inkwell admin</title>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape_html_text(title),
    )
}
