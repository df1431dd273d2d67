//! # Driving Ports (API - Inbound)
//!
//! The operation set exposed by the registry subsystem. Transport layers
//! (the HTTP gateway) depend on this trait rather than on the concrete
//! service, so the registry can be faked in their tests.
//!
//! Caller identity is an explicit parameter on every mutating operation: the
//! surrounding environment authenticates the principal and passes it in, and
//! authorization inside the registry is a plain equality check against the
//! identity stored with the owning record.

use crate::domain::entities::{Manufacturer, Product, Seller};
use crate::domain::errors::RegistryError;
use crate::domain::value_objects::{Identity, TokenAmount};
use async_trait::async_trait;

/// Public API of the authenticity registry.
///
/// Mutating operations fail atomically with a [`RegistryError`]; read-only
/// operations never fail and signal absence with `None` or `false`.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// Registers a manufacturer under a caller-chosen string ID.
    ///
    /// Fails with [`RegistryError::ManufacturerExists`] if the ID is taken.
    /// The caller becomes the only identity allowed to register products
    /// under this ID. No other validation; names may be empty.
    async fn register_manufacturer(
        &self,
        caller: Identity,
        manufacturer_id: &str,
        name: &str,
    ) -> Result<(), RegistryError>;

    /// Registers a product under a serial number.
    ///
    /// Fails with [`RegistryError::NotAuthorizedManufacturer`] unless the
    /// stored manufacturer for `manufacturer_id` has `address == caller`
    /// (an unknown ID is the same failure), and with
    /// [`RegistryError::ProductExists`] if the serial number is taken.
    async fn register_product(
        &self,
        caller: Identity,
        manufacturer_id: &str,
        name: &str,
        serial_number: &str,
        price: TokenAmount,
        brand: &str,
    ) -> Result<(), RegistryError>;

    /// Registers the caller as a seller.
    ///
    /// Fails with [`RegistryError::SellerExists`] if the caller already
    /// holds a seller record. One record per identity, forever.
    async fn add_seller(
        &self,
        caller: Identity,
        seller_code: &str,
        name: &str,
        brand: &str,
    ) -> Result<(), RegistryError>;

    /// Transfers a product to a registered seller.
    ///
    /// Fails with [`RegistryError::ProductNotFound`] for unknown serials,
    /// [`RegistryError::NotProductManufacturer`] when the caller is not the
    /// product's manufacturer, and [`RegistryError::SellerNotRegistered`]
    /// when the target holds no seller record. On success only
    /// `current_owner` changes.
    async fn transfer_product(
        &self,
        caller: Identity,
        serial_number: &str,
        new_owner: Identity,
    ) -> Result<(), RegistryError>;

    /// Returns the full product record, or `None` if the serial number is
    /// unregistered. Never fails, regardless of caller.
    async fn verify_product(&self, serial_number: &str) -> Option<Product>;

    /// Returns true iff a product with this serial number is registered.
    /// There is no authenticity logic beyond registration status.
    async fn is_product_authentic(&self, serial_number: &str) -> bool;

    /// Returns the seller record for an identity, or `None`.
    async fn get_seller_info(&self, identity: Identity) -> Option<Seller>;

    /// Returns the manufacturer record for an ID, or `None`.
    async fn get_manufacturer_info(&self, manufacturer_id: &str) -> Option<Manufacturer>;
}
