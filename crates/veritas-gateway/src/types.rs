//! Wire types.
//!
//! Field names are camelCase and prices are 18-decimal strings, matching the
//! JSON the browser form frontends exchange with the relay server.
//! Lookup responses reconstitute the zero-valued "not found" record with an
//! `isRegistered` flag, so callers can keep checking registration the way
//! they always have.

use serde::{Deserialize, Serialize};
use veritas_registry::prelude::{Identity, Manufacturer, Product, Seller};

// =============================================================================
// REQUESTS
// =============================================================================

/// Body of `POST /registerManufacturer`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterManufacturerRequest {
    /// Manufacturer-chosen string ID.
    pub manufacturer_id: String,
    /// Display name.
    pub name: String,
}

/// Body of `POST /registerProduct`. The price is a decimal string; it is
/// parsed into 18-decimal fixed point before reaching the registry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterProductRequest {
    /// Manufacturer ID the product registers under.
    pub manufacturer_id: String,
    /// Display name.
    pub product_name: String,
    /// Serial number key.
    pub serial_number: String,
    /// Decimal price string, e.g. `"1.0"`.
    pub price: String,
    /// Brand name.
    pub brand: String,
}

/// Body of `POST /addSeller`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSellerRequest {
    /// Seller-chosen code.
    pub seller_code: String,
    /// Display name.
    pub name: String,
    /// Brand the seller carries.
    pub brand: String,
}

/// Body of `POST /transferProduct`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferProductRequest {
    /// Serial number of the product to transfer.
    pub serial_number: String,
    /// Identity receiving the product; must hold a seller record.
    pub new_owner: Identity,
}

/// Body of `POST /verifyProduct`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyProductRequest {
    /// Serial number to look up.
    pub product_id: String,
}

// =============================================================================
// RESPONSES
// =============================================================================

/// The `{ success, message }` envelope used by mutations and failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

impl StatusResponse {
    /// A success envelope.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failure envelope.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Response of `POST /registerProduct`: echoes the serial under which the
/// product registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterProductResponse {
    /// Always true on this response.
    pub success: bool,
    /// The serial number the product registered under.
    pub product_id: String,
    /// Human-readable outcome.
    pub message: String,
}

/// A product record on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    /// Display name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Decimal price string.
    pub price: String,
    /// Manufacturer identity, full hex form.
    pub manufacturer: String,
    /// Current owner identity, full hex form.
    pub current_owner: String,
    /// Authenticity flag.
    pub is_authentic: bool,
    /// Registration flag.
    pub is_registered: bool,
}

impl From<Product> for ProductInfo {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            brand: product.brand,
            price: product.price.to_string(),
            manufacturer: product.manufacturer.to_string(),
            current_owner: product.current_owner.to_string(),
            is_authentic: product.is_authentic,
            is_registered: true,
        }
    }
}

/// Response of `POST /verifyProduct`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyProductResponse {
    /// Whether the serial number is in the registry.
    pub exists: bool,
    /// Whether the product is authentic (equivalent to `exists` here).
    pub is_authentic: bool,
    /// The record, present only when registered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_info: Option<ProductInfo>,
}

impl From<Option<Product>> for VerifyProductResponse {
    fn from(product: Option<Product>) -> Self {
        match product {
            Some(product) => Self {
                exists: true,
                is_authentic: product.is_authentic,
                product_info: Some(product.into()),
            },
            None => Self {
                exists: false,
                is_authentic: false,
                product_info: None,
            },
        }
    }
}

/// A seller record on the wire; zero-valued with `isRegistered: false` when
/// the identity has no record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerInfo {
    /// Display name, empty when unregistered.
    pub name: String,
    /// Seller code, empty when unregistered.
    pub seller_code: String,
    /// Brand, empty when unregistered.
    pub brand: String,
    /// Registration flag.
    pub is_registered: bool,
}

impl From<Option<Seller>> for SellerInfo {
    fn from(seller: Option<Seller>) -> Self {
        match seller {
            Some(seller) => Self {
                name: seller.name,
                seller_code: seller.seller_code,
                brand: seller.brand,
                is_registered: true,
            },
            None => Self {
                name: String::new(),
                seller_code: String::new(),
                brand: String::new(),
                is_registered: false,
            },
        }
    }
}

/// Response of `GET /getSellerInfo/:address`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerInfoResponse {
    /// Lookup transport succeeded (absence is not a failure).
    pub success: bool,
    /// The record, zero-valued when absent.
    pub seller_info: SellerInfo,
}

/// A manufacturer record on the wire; zero-valued with `isRegistered: false`
/// when the ID is unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerInfo {
    /// Display name, empty when unregistered.
    pub name: String,
    /// Owning identity, the zero identity when unregistered.
    pub manufacturer_address: String,
    /// Registration flag.
    pub is_registered: bool,
}

impl From<Option<Manufacturer>> for ManufacturerInfo {
    fn from(manufacturer: Option<Manufacturer>) -> Self {
        match manufacturer {
            Some(manufacturer) => Self {
                name: manufacturer.name,
                manufacturer_address: manufacturer.address.to_string(),
                is_registered: true,
            },
            None => Self {
                name: String::new(),
                manufacturer_address: Identity::ZERO.to_string(),
                is_registered: false,
            },
        }
    }
}

/// Response of `GET /getManufacturerInfo/:manufacturerId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerInfoResponse {
    /// Lookup transport succeeded (absence is not a failure).
    pub success: bool,
    /// The record, zero-valued when absent.
    pub manufacturer_info: ManufacturerInfo,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Fixed "ok" marker.
    pub status: &'static str,
    /// Crate version serving the request.
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_registry::prelude::TokenAmount;

    #[test]
    fn test_product_info_wire_shape() {
        let product = Product::register(
            "Widget",
            "Acme",
            "1.0".parse::<TokenAmount>().unwrap(),
            Identity::new([0xaa; 20]),
        );
        let json = serde_json::to_value(VerifyProductResponse::from(Some(product))).unwrap();

        assert_eq!(json["exists"], true);
        assert_eq!(json["isAuthentic"], true);
        assert_eq!(json["productInfo"]["price"], "1.0");
        assert_eq!(json["productInfo"]["isRegistered"], true);
        assert_eq!(
            json["productInfo"]["currentOwner"],
            "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
        );
    }

    #[test]
    fn test_missing_product_omits_record() {
        let json = serde_json::to_value(VerifyProductResponse::from(None)).unwrap();
        assert_eq!(json["exists"], false);
        assert_eq!(json["isAuthentic"], false);
        assert!(json.get("productInfo").is_none());
    }

    #[test]
    fn test_absent_lookups_are_zero_valued() {
        let seller = SellerInfo::from(None);
        assert!(!seller.is_registered);
        assert!(seller.name.is_empty());

        let manufacturer = ManufacturerInfo::from(None);
        assert!(!manufacturer.is_registered);
        assert_eq!(
            manufacturer.manufacturer_address,
            "0x0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_request_bodies_use_camel_case() {
        let req: RegisterProductRequest = serde_json::from_str(
            r#"{"manufacturerId":"MAN001","productName":"Widget","serialNumber":"SN001","price":"1.0","brand":"Acme"}"#,
        )
        .unwrap();
        assert_eq!(req.product_name, "Widget");
        assert_eq!(req.serial_number, "SN001");
    }
}
