//! # Core Domain Entities
//!
//! The three record types the registry tracks. All of them are append-only:
//! once stored they are never deleted, and only a product's `current_owner`
//! may change after creation.

use crate::domain::value_objects::{Identity, TokenAmount};
use serde::{Deserialize, Serialize};

// =============================================================================
// MANUFACTURER
// =============================================================================

/// A registered manufacturer, keyed by a manufacturer-chosen string ID.
///
/// Created once; never mutated or deleted. The stored `address` is the
/// identity that performed the registration and is the only identity allowed
/// to register products under this ID.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Display name. May be empty; no validation is applied.
    pub name: String,
    /// Identity that registered this manufacturer ID.
    pub address: Identity,
}

impl Manufacturer {
    /// Creates a manufacturer record owned by `address`.
    #[must_use]
    pub fn new(name: impl Into<String>, address: Identity) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

// =============================================================================
// SELLER
// =============================================================================

/// A registered seller, keyed by the registering caller's [`Identity`].
///
/// One record per identity, immutable after creation. Holding a seller
/// record is what qualifies an identity as a product transfer target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// Display name.
    pub name: String,
    /// Seller-chosen code. Not a key; duplicates across sellers are allowed.
    pub seller_code: String,
    /// Brand the seller carries.
    pub brand: String,
}

impl Seller {
    /// Creates a seller record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        seller_code: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            seller_code: seller_code.into(),
            brand: brand.into(),
        }
    }
}

// =============================================================================
// PRODUCT
// =============================================================================

/// A registered product, keyed by its serial-number string.
///
/// `manufacturer` is fixed at registration. `current_owner` starts equal to
/// `manufacturer` and advances through registered-seller identities via
/// transfer. `is_authentic` is set at registration and never toggled in this
/// version; presence in the registry is the authenticity signal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name.
    pub name: String,
    /// Brand the product belongs to.
    pub brand: String,
    /// Price in 18-decimal fixed point.
    pub price: TokenAmount,
    /// Identity of the registering manufacturer. Immutable.
    pub manufacturer: Identity,
    /// Identity currently holding the product.
    pub current_owner: Identity,
    /// Authenticity flag, true from registration onward.
    pub is_authentic: bool,
}

impl Product {
    /// Creates a freshly registered product.
    ///
    /// The registering manufacturer is the initial owner and the product is
    /// authentic from the moment it enters the registry.
    #[must_use]
    pub fn register(
        name: impl Into<String>,
        brand: impl Into<String>,
        price: TokenAmount,
        manufacturer: Identity,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            price,
            manufacturer,
            current_owner: manufacturer,
            is_authentic: true,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_register_defaults() {
        let maker = Identity::new([1u8; 20]);
        let product = Product::register("Widget", "Acme", "1.0".parse().unwrap(), maker);

        assert_eq!(product.manufacturer, maker);
        assert_eq!(product.current_owner, maker);
        assert!(product.is_authentic);
        assert_eq!(product.price.to_string(), "1.0");
    }

    #[test]
    fn test_manufacturer_allows_empty_name() {
        let record = Manufacturer::new("", Identity::new([2u8; 20]));
        assert!(record.name.is_empty());
    }

    #[test]
    fn test_entities_serialize() {
        let seller = Seller::new("Shop", "SELLER001", "Acme");
        let json = serde_json::to_value(&seller).unwrap();
        assert_eq!(json["seller_code"], "SELLER001");
    }
}
