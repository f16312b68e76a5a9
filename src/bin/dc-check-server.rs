// Copyright (c) 2025 - Cowboy AI, Inc.
//! dc-check API Server
//!
//! Serves rack connectivity from a rack description file as JSON.
//!
//! Run with: cargo run --bin dc-check-server -- --db racks.yaml [--port 10101]
//!
//! Flags fall back to DC_CHECK_DB, DC_CHECK_PORT and DC_CHECK_BIND.

use anyhow::{Context, Result};
use clap::Parser;
use dc_check::{api, config::ServerConfig, loader::read_topology_file};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("🚀 Starting dc-check API server");

    let config = ServerConfig::parse();
    info!("📋 Configuration loaded:");
    info!("  - DB file: {}", config.db.display());
    info!("  - Listen: {}", config.socket_addr());

    // The file is re-read on every request; a bad file at startup is only a warning.
    match read_topology_file(&config.db) {
        Ok(topology) => info!(
            "✅ {} devices in {} racks",
            topology.devices().len(),
            topology.racks().len()
        ),
        Err(e) => warn!("⚠️ DB file does not load yet: {}", e),
    }

    api::serve(&config)
        .await
        .with_context(|| format!("Failed to serve on {}", config.socket_addr()))?;

    info!("server finished");
    Ok(())
}
