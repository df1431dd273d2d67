//! # Registry Service
//!
//! Implements [`RegistryApi`] over a [`RegistryStore`]: every operation is a
//! guarded insert or a guarded owner rewrite, and every guard compares the
//! active caller against an identity fixed at registration time.
//!
//! ## Concurrency
//!
//! The store primitives are indivisible, so duplicate-key races resolve to
//! exactly one winner. The composed guard sequences here stay sound under
//! interleaving because every field they read is immutable after creation
//! (a manufacturer's `address`, a product's `manufacturer`, the presence of
//! a seller record); `current_owner` is only ever written through
//! `update_product_owner`.

use crate::domain::entities::{Manufacturer, Product, Seller};
use crate::domain::errors::RegistryError;
use crate::domain::value_objects::{Identity, TokenAmount};
use crate::events::RegistryEvent;
use crate::ports::inbound::RegistryApi;
use crate::ports::outbound::RegistryStore;

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{info, instrument, warn};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Registry service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Capacity of the event broadcast channel. Slow subscribers past this
    /// backlog start losing events; the registry itself is unaffected.
    pub event_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            event_capacity: 256,
        }
    }
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Counters for registry activity.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Manufacturer IDs registered.
    pub manufacturers_registered: u64,
    /// Products registered.
    pub products_registered: u64,
    /// Sellers registered.
    pub sellers_registered: u64,
    /// Successful ownership transfers.
    pub products_transferred: u64,
    /// Mutating operations rejected by a guard.
    pub rejected_operations: u64,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The registry state machine over a storage port.
pub struct RegistryService<S: RegistryStore> {
    store: Arc<S>,
    stats: Arc<RwLock<ServiceStats>>,
    events: broadcast::Sender<RegistryEvent>,
}

impl<S: RegistryStore> RegistryService<S> {
    /// Creates a service over the given store.
    pub fn new(store: S, config: ServiceConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            store: Arc::new(store),
            stats: Arc::new(RwLock::new(ServiceStats::default())),
            events,
        }
    }

    /// Subscribes to state-transition events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.events.subscribe()
    }

    /// Returns a snapshot of the activity counters.
    #[must_use]
    pub fn stats(&self) -> ServiceStats {
        self.stats.read().clone()
    }

    fn reject(&self, err: RegistryError) -> RegistryError {
        self.stats.write().rejected_operations += 1;
        warn!(error = %err, "registry operation rejected");
        err
    }

    fn publish(&self, event: RegistryEvent) {
        // No subscribers is fine; delivery is best-effort
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl<S: RegistryStore> RegistryApi for RegistryService<S> {
    #[instrument(skip(self, name))]
    async fn register_manufacturer(
        &self,
        caller: Identity,
        manufacturer_id: &str,
        name: &str,
    ) -> Result<(), RegistryError> {
        self.store
            .insert_manufacturer(manufacturer_id, Manufacturer::new(name, caller))
            .map_err(|_| self.reject(RegistryError::ManufacturerExists(manufacturer_id.into())))?;

        self.stats.write().manufacturers_registered += 1;
        info!(%caller, manufacturer_id, "manufacturer registered");
        self.publish(RegistryEvent::ManufacturerRegistered {
            manufacturer_id: manufacturer_id.to_string(),
            address: caller,
        });
        Ok(())
    }

    #[instrument(skip(self, name, brand))]
    async fn register_product(
        &self,
        caller: Identity,
        manufacturer_id: &str,
        name: &str,
        serial_number: &str,
        price: TokenAmount,
        brand: &str,
    ) -> Result<(), RegistryError> {
        // Authorization: the stored address for this manufacturer ID must be
        // the active caller. An unknown ID fails the same way, matching the
        // zero-record comparison the capability model implies.
        let authorized = self
            .store
            .manufacturer(manufacturer_id)
            .is_some_and(|m| m.address == caller);
        if !authorized {
            return Err(self.reject(RegistryError::NotAuthorizedManufacturer(
                manufacturer_id.into(),
            )));
        }

        self.store
            .insert_product(serial_number, Product::register(name, brand, price, caller))
            .map_err(|_| self.reject(RegistryError::ProductExists(serial_number.into())))?;

        self.stats.write().products_registered += 1;
        info!(%caller, manufacturer_id, serial_number, "product registered");
        self.publish(RegistryEvent::ProductRegistered {
            serial_number: serial_number.to_string(),
            manufacturer: caller,
        });
        Ok(())
    }

    #[instrument(skip(self, name, brand))]
    async fn add_seller(
        &self,
        caller: Identity,
        seller_code: &str,
        name: &str,
        brand: &str,
    ) -> Result<(), RegistryError> {
        self.store
            .insert_seller(caller, Seller::new(name, seller_code, brand))
            .map_err(|_| self.reject(RegistryError::SellerExists(caller)))?;

        self.stats.write().sellers_registered += 1;
        info!(%caller, seller_code, "seller registered");
        self.publish(RegistryEvent::SellerRegistered {
            identity: caller,
            seller_code: seller_code.to_string(),
        });
        Ok(())
    }

    #[instrument(skip(self))]
    async fn transfer_product(
        &self,
        caller: Identity,
        serial_number: &str,
        new_owner: Identity,
    ) -> Result<(), RegistryError> {
        let product = self
            .store
            .product(serial_number)
            .ok_or_else(|| self.reject(RegistryError::ProductNotFound(serial_number.into())))?;

        if product.manufacturer != caller {
            return Err(self.reject(RegistryError::NotProductManufacturer(serial_number.into())));
        }
        if self.store.seller(new_owner).is_none() {
            return Err(self.reject(RegistryError::SellerNotRegistered(new_owner)));
        }

        let previous_owner = product.current_owner;
        self.store
            .update_product_owner(serial_number, new_owner)
            .map_err(|_| self.reject(RegistryError::ProductNotFound(serial_number.into())))?;

        self.stats.write().products_transferred += 1;
        info!(%caller, serial_number, %new_owner, "product transferred");
        self.publish(RegistryEvent::ProductTransferred {
            serial_number: serial_number.to_string(),
            from: previous_owner,
            to: new_owner,
        });
        Ok(())
    }

    async fn verify_product(&self, serial_number: &str) -> Option<Product> {
        self.store.product(serial_number)
    }

    async fn is_product_authentic(&self, serial_number: &str) -> bool {
        self.store.product(serial_number).is_some()
    }

    async fn get_seller_info(&self, identity: Identity) -> Option<Seller> {
        self.store.seller(identity)
    }

    async fn get_manufacturer_info(&self, manufacturer_id: &str) -> Option<Manufacturer> {
        self.store.manufacturer(manufacturer_id)
    }
}

// =============================================================================
// TESTS
// =============================================================================
