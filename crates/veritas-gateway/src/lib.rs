//! REST gateway for the authenticity registry.
//!
//! Maps the registry's operation set onto HTTP request/response pairs:
//! mutating routes carry the caller principal in an `x-identity` header,
//! read-only routes are open, and registry failures translate onto HTTP
//! status codes by failure kind. Field names on the wire are camelCase and
//! prices travel as 18-decimal strings.
//!
//! The gateway owns transport concerns only - CORS, body limits, request
//! timeouts, per-request tracing. Everything else is the registry's job.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod service;
pub mod types;

pub use config::{ConfigError, GatewayConfig};
pub use error::{ApiError, GatewayError};
pub use router::{build_router, AppState};
pub use service::GatewayService;
