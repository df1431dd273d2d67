//! # Ports
//!
//! Trait seams of the registry subsystem: the inbound operation set exposed
//! to callers, and the outbound storage interface adapters implement.

pub mod inbound;
pub mod outbound;

pub use inbound::RegistryApi;
pub use outbound::RegistryStore;
