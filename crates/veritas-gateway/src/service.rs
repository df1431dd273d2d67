//! Gateway service - binds the listener and serves the router.

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::router::{build_router, AppState};
use std::future::Future;
use tracing::info;

/// The HTTP front of the registry.
pub struct GatewayService {
    config: GatewayConfig,
}

impl GatewayService {
    /// Creates a gateway from a validated configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration this gateway runs with.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Serves until the shutdown future resolves.
    pub async fn run(
        self,
        state: AppState,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), GatewayError> {
        let router = build_router(state, &self.config);
        let addr = self.config.http_addr();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(%addr, "gateway listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("gateway stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = GatewayConfig::default();
        config.http.port = 0;
        assert!(matches!(
            GatewayService::new(config),
            Err(GatewayError::Config(ConfigError::InvalidPort))
        ));
    }
}
