// ABOUTME: HTTP server assembly: shared resources, router, listener, and graceful shutdown
// ABOUTME: Resources are built once from the validated config and shared read-only via Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! # Blog Server
//!
//! [`ServerResources`] owns everything a request handler may need. It is
//! created once at startup; there is no per-request mutable auth state.

use crate::admin::{AdminAuthenticator, SessionTokenManager};
use crate::config::ServerConfig;
use crate::database::{InMemoryPostStore, InMemorySubscriberStore, PostStore, SubscriberStore};
use crate::errors::{AppError, AppResult};
use crate::middleware::AdminGate;
use crate::routes::build_router;
use axum::Router;
use std::future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// Shared, read-only state for all routes
pub struct ServerResources {
    /// Validated configuration
    pub config: Arc<ServerConfig>,
    /// Credential check and token issuance
    pub authenticator: AdminAuthenticator,
    /// Session gate
    pub gate: Arc<AdminGate>,
    /// Post storage
    pub posts: Arc<dyn PostStore>,
    /// Subscriber storage
    pub subscribers: Arc<dyn SubscriberStore>,
}

impl ServerResources {
    /// Build resources with the in-memory stores
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self::with_stores(
            config,
            Arc::new(InMemoryPostStore::new()),
            Arc::new(InMemorySubscriberStore::new()),
        )
    }

    /// Build resources around caller-supplied stores
    #[must_use]
    pub fn with_stores(
        config: ServerConfig,
        posts: Arc<dyn PostStore>,
        subscribers: Arc<dyn SubscriberStore>,
    ) -> Self {
        let tokens = Arc::new(SessionTokenManager::new(config.auth.jwt_secret.as_bytes()));
        let authenticator = AdminAuthenticator::new(&config.auth, tokens.clone());
        let gate = Arc::new(AdminGate::new(
            tokens,
            config.trusts_signing_secret(),
            config.secure_cookies(),
        ));

        Self {
            config: Arc::new(config),
            authenticator,
            gate,
            posts,
            subscribers,
        }
    }
}

/// The blog HTTP server
pub struct BlogServer {
    resources: Arc<ServerResources>,
}

impl BlogServer {
    /// Create a server over prepared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// The fully layered router
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(self.resources.clone())
    }

    /// Bind and serve until Ctrl-C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    /// while running
    pub async fn run(self, port: u16) -> AppResult<()> {
        let host = self.resources.config.host.as_str();
        let listener = TcpListener::bind((host, port))
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {host}:{port}: {e}")))?;
        let address = listener
            .local_addr()
            .map_err(|e| AppError::internal(format!("Failed to read bound address: {e}")))?;
        info!("Inkwell Blog listening on http://{address}");
        info!("Admin login page: http://{address}/adminauth");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))?;

        info!("Server shut down cleanly");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
