//! # Registry Events
//!
//! Notifications published after successful state transitions. Delivery is
//! best-effort over a `tokio` broadcast channel; the registry does not care
//! whether anyone is listening, and a lagging subscriber only loses its own
//! backlog.

use crate::domain::value_objects::Identity;
use serde::{Deserialize, Serialize};

/// A successful state transition in the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A manufacturer ID was claimed.
    ManufacturerRegistered {
        /// The registered manufacturer ID.
        manufacturer_id: String,
        /// Identity that now owns the ID.
        address: Identity,
    },

    /// A product entered the registry.
    ProductRegistered {
        /// The registered serial number.
        serial_number: String,
        /// Manufacturer (and initial owner) of the product.
        manufacturer: Identity,
    },

    /// An identity registered as a seller.
    SellerRegistered {
        /// The newly registered seller.
        identity: Identity,
        /// Seller-chosen code carried on the record.
        seller_code: String,
    },

    /// A product changed hands.
    ProductTransferred {
        /// Serial number of the transferred product.
        serial_number: String,
        /// Previous owner.
        from: Identity,
        /// New owner.
        to: Identity,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_variant_tag() {
        let event = RegistryEvent::ProductTransferred {
            serial_number: "SN001".to_string(),
            from: Identity::new([1u8; 20]),
            to: Identity::new([2u8; 20]),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("ProductTransferred").is_some());
    }
}
