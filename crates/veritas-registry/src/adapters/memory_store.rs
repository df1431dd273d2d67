//! In-memory implementation of [`RegistryStore`].
//!
//! Three `HashMap`s behind `parking_lot` locks. Each operation takes its
//! map's lock exactly once, which gives the insert-if-absent primitives the
//! indivisibility the port contract requires.

use crate::domain::entities::{Manufacturer, Product, Seller};
use crate::domain::errors::StoreError;
use crate::domain::value_objects::Identity;
use crate::ports::outbound::RegistryStore;
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Process-local registry storage.
#[derive(Default)]
pub struct InMemoryStore {
    manufacturers: RwLock<HashMap<String, Manufacturer>>,
    products: RwLock<HashMap<String, Product>>,
    sellers: RwLock<HashMap<Identity, Seller>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistryStore for InMemoryStore {
    fn insert_manufacturer(&self, id: &str, record: Manufacturer) -> Result<(), StoreError> {
        match self.manufacturers.write().entry(id.to_string()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey(id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn manufacturer(&self, id: &str) -> Option<Manufacturer> {
        self.manufacturers.read().get(id).cloned()
    }

    fn insert_product(&self, serial_number: &str, record: Product) -> Result<(), StoreError> {
        match self.products.write().entry(serial_number.to_string()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey(serial_number.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn product(&self, serial_number: &str) -> Option<Product> {
        self.products.read().get(serial_number).cloned()
    }

    fn insert_seller(&self, identity: Identity, record: Seller) -> Result<(), StoreError> {
        match self.sellers.write().entry(identity) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey(identity.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn seller(&self, identity: Identity) -> Option<Seller> {
        self.sellers.read().get(&identity).cloned()
    }

    fn update_product_owner(
        &self,
        serial_number: &str,
        new_owner: Identity,
    ) -> Result<Product, StoreError> {
        let mut products = self.products.write();
        let product = products
            .get_mut(serial_number)
            .ok_or_else(|| StoreError::NotFound(serial_number.to_string()))?;
        product.current_owner = new_owner;
        Ok(product.clone())
    }
}

// =============================================================================
// TESTS
// =============================================================================
