//! # Veritas Registry - Product Authenticity Subsystem
//!
//! Tracks manufacturers, sellers, and products by serial number behind a set
//! of guarded state transitions. Presence in the registry with a registered
//! product record is the sole authenticity signal; there is no separate
//! revocation flag in this version.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Manufacturer IDs register exactly once | `adapters/memory_store.rs` - `insert_manufacturer()` |
//! | Serial numbers register exactly once | `adapters/memory_store.rs` - `insert_product()` |
//! | One seller record per identity | `adapters/memory_store.rs` - `insert_seller()` |
//! | Only the recorded manufacturer registers its products | `service.rs` - `register_product()` |
//! | Only the product's manufacturer transfers it | `service.rs` - `transfer_product()` |
//! | Transfer targets must hold a seller record | `service.rs` - `transfer_product()` |
//! | `current_owner` is the only mutable field | `ports/outbound.rs` - `update_product_owner()` |
//!
//! ## Architecture
//!
//! Hexagonal: `domain/` holds entities and value objects, `ports/` the
//! inbound API and outbound storage traits, `adapters/` the in-memory store,
//! and `service.rs` the transition logic wiring them together. Registrations
//! and transfers publish [`events::RegistryEvent`]s on a broadcast channel.
//!
//! ## Usage Example
//!
//! ```ignore
//! use veritas_registry::prelude::*;
//!
//! let service = RegistryService::new(InMemoryStore::new(), ServiceConfig::default());
//! service.register_manufacturer(caller, "MAN001", "Acme").await?;
//! let product = service.verify_product("SN001").await;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{Manufacturer, Product, Seller};

    // Value objects
    pub use crate::domain::value_objects::{Identity, TokenAmount};

    // Errors
    pub use crate::domain::errors::{
        ErrorKind, ParseAmountError, ParseIdentityError, RegistryError, StoreError,
    };

    // Ports
    pub use crate::ports::inbound::RegistryApi;
    pub use crate::ports::outbound::RegistryStore;

    // Events
    pub use crate::events::RegistryEvent;

    // Adapters
    pub use crate::adapters::InMemoryStore;

    // Service
    pub use crate::service::{RegistryService, ServiceConfig, ServiceStats};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
