//! # Veritas Node
//!
//! Process entry point: initializes tracing, loads configuration from the
//! environment, wires the in-memory store into the registry service, and
//! serves the REST gateway until ctrl-c.
//!
//! ## Startup Sequence
//!
//! 1. Install the tracing subscriber (`RUST_LOG` controls the filter)
//! 2. Load `VERITAS_*` configuration overrides
//! 3. Build store -> registry service -> gateway
//! 4. Serve; ctrl-c drains in-flight requests and exits

mod config;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::NodeConfig;
use veritas_gateway::{AppState, GatewayService};
use veritas_registry::prelude::{InMemoryStore, RegistryService, ServiceConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = NodeConfig::from_env().context("loading configuration")?;
    info!(version = veritas_registry::VERSION, "starting veritas node");

    let registry = Arc::new(RegistryService::new(
        InMemoryStore::new(),
        ServiceConfig::default(),
    ));
    let state = AppState::new(registry);

    let gateway = GatewayService::new(config.gateway).context("building gateway")?;
    gateway
        .run(state, shutdown_signal())
        .await
        .context("serving gateway")?;

    info!("veritas node stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        return;
    }
    info!("shutdown signal received");
}
