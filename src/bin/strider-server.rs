// ABOUTME: Strider server binary - HTTP service for weekly schedule generation
// ABOUTME: Wires config, logging, cache, prediction provider, and routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Strider Server Binary
//!
//! Starts the schedule-generation HTTP service: loads environment
//! configuration, connects the wearable-account prediction provider, and
//! serves the API.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use strider::cache::memory::InMemoryCache;
use strider::cache::CacheConfig;
use strider::config::environment::ServerConfig;
use strider::providers::WearablePredictionsClient;
use strider::{logging, routes, ServerResources};

#[derive(Parser)]
#[command(name = "strider-server")]
#[command(about = "Strider - rule-based running-plan periodization service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting Strider schedule service");
    info!("{}", config.summary());

    let cache = InMemoryCache::new(&CacheConfig {
        max_entries: config.cache.max_entries,
        cleanup_interval: config.cache.cleanup_interval,
        enable_background_cleanup: true,
    });
    let provider = Arc::new(WearablePredictionsClient::from_config(&config.predictions)?);

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(config, cache, provider));
    let app = routes::router(resources);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on port {port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
