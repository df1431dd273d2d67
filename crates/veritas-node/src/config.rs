//! # Node Configuration
//!
//! Defaults with environment overrides. Every knob reads from a `VERITAS_*`
//! variable so deployments configure the process without a config file.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `VERITAS_HTTP_HOST` | Gateway bind address | `127.0.0.1` |
//! | `VERITAS_HTTP_PORT` | Gateway bind port | `3000` |
//! | `VERITAS_CORS_ORIGINS` | Comma-separated allowed origins; unset allows any | permissive |

use anyhow::{Context, Result};
use std::net::IpAddr;
use veritas_gateway::GatewayConfig;

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Gateway configuration.
    pub gateway: GatewayConfig,
}

impl NodeConfig {
    /// Builds the configuration from defaults and `VERITAS_*` overrides.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("VERITAS_HTTP_HOST") {
            config.gateway.http.host = host
                .parse::<IpAddr>()
                .with_context(|| format!("VERITAS_HTTP_HOST is not an IP address: {host}"))?;
        }
        if let Ok(port) = std::env::var("VERITAS_HTTP_PORT") {
            config.gateway.http.port = port
                .parse::<u16>()
                .with_context(|| format!("VERITAS_HTTP_PORT is not a port number: {port}"))?;
        }
        if let Ok(origins) = std::env::var("VERITAS_CORS_ORIGINS") {
            config.gateway.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NodeConfig::default();
        assert_eq!(config.gateway.http_addr().to_string(), "127.0.0.1:3000");
        assert!(config.gateway.cors.allowed_origins.is_empty());
    }
}
