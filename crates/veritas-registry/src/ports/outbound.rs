//! # Driven Ports (SPI - Outbound)
//!
//! Storage interface the registry depends on. Adapters implement keyed
//! storage with insert-if-absent semantics; all domain rules live in the
//! service layer above.
//!
//! ## Implementation Notes
//!
//! Each method must be a single indivisible step: an insert checks for and
//! rejects duplicates under the same lock it writes with, so two concurrent
//! registrations of one key can never both succeed. The only permitted
//! mutation of an existing record is `update_product_owner`.

use crate::domain::entities::{Manufacturer, Product, Seller};
use crate::domain::errors::StoreError;
use crate::domain::value_objects::Identity;

/// Keyed storage for the three registry maps.
pub trait RegistryStore: Send + Sync {
    /// Inserts a manufacturer record if the ID is free.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateKey`] if the ID is already present.
    fn insert_manufacturer(&self, id: &str, record: Manufacturer) -> Result<(), StoreError>;

    /// Looks up a manufacturer by ID.
    fn manufacturer(&self, id: &str) -> Option<Manufacturer>;

    /// Inserts a product record if the serial number is free.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateKey`] if the serial number is already present.
    fn insert_product(&self, serial_number: &str, record: Product) -> Result<(), StoreError>;

    /// Looks up a product by serial number.
    fn product(&self, serial_number: &str) -> Option<Product>;

    /// Inserts a seller record if the identity has none.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateKey`] if the identity already has a record.
    fn insert_seller(&self, identity: Identity, record: Seller) -> Result<(), StoreError>;

    /// Looks up a seller by identity.
    fn seller(&self, identity: Identity) -> Option<Seller>;

    /// Rewrites a product's `current_owner`, returning the updated record.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the serial number is unregistered.
    fn update_product_owner(
        &self,
        serial_number: &str,
        new_owner: Identity,
    ) -> Result<Product, StoreError>;
}
