// ABOUTME: Server binary: loads and validates configuration, initializes logging, serves HTTP
// ABOUTME: Also offers one-shot helpers for generating a signing secret and hashing the admin password
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

//! # Inkwell Blog Server Binary
//!
//! Refuses to start when the configuration is unsafe for the deployment
//! environment, e.g. a placeholder `JWT_SECRET` in production.

use anyhow::Result;
use clap::Parser;
use inkwell_blog::admin::{hash_password, SessionTokenManager};
use inkwell_blog::config::environment::ServerConfig;
use inkwell_blog::logging;
use inkwell_blog::server::{BlogServer, ServerResources};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "inkwell-blog")]
#[command(about = "Inkwell - personal blog server with a gated admin panel")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Print a freshly generated JWT signing secret and exit
    #[arg(long)]
    generate_secret: bool,

    /// Print an Argon2 hash of the given password for ADMIN_PASSWORD and exit
    #[arg(long, value_name = "PASSWORD")]
    hash_password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_secret {
        println!("{}", SessionTokenManager::generate_secret());
        return Ok(());
    }
    if let Some(password) = args.hash_password.as_deref() {
        println!("{}", hash_password(password)?);
        return Ok(());
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_for_server(&config)?;
    info!("{}", config.summary());

    if let Err(e) = config.validate() {
        error!("Configuration rejected: {e}");
        return Err(e.into());
    }

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(config));
    BlogServer::new(resources).run(port).await?;

    Ok(())
}
