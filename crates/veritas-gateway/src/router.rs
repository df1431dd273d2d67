//! Route table and middleware stack.

use crate::config::GatewayConfig;
use crate::handlers;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;
use veritas_registry::prelude::RegistryApi;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The registry behind this gateway.
    pub registry: Arc<dyn RegistryApi>,
}

impl AppState {
    /// Wraps a registry implementation.
    pub fn new(registry: Arc<dyn RegistryApi>) -> Self {
        Self { registry }
    }
}

/// Builds the gateway router with its transport middleware.
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    Router::new()
        .route(
            "/registerManufacturer",
            post(handlers::register_manufacturer),
        )
        .route("/registerProduct", post(handlers::register_product))
        .route("/addSeller", post(handlers::add_seller))
        .route("/transferProduct", post(handlers::transfer_product))
        .route("/verifyProduct", post(handlers::verify_product))
        .route("/getSellerInfo/:address", get(handlers::get_seller_info))
        .route(
            "/getManufacturerInfo/:manufacturerId",
            get(handlers::get_manufacturer_info),
        )
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .layer(RequestBodyLimitLayer::new(config.limits.max_request_size))
        .layer(TimeoutLayer::new(config.timeouts.request))
        .with_state(state)
}

fn cors_layer(config: &GatewayConfig) -> CorsLayer {
    if config.cors.allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                // validate() rejects these up front; keep serving if one
                // slips through a hand-built config
                warn!(origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
