//! # Error Types
//!
//! All error types for the authenticity registry.

use crate::domain::value_objects::Identity;
use thiserror::Error;

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Failure kinds exposed to transport layers.
///
/// Every [`RegistryError`] maps onto exactly one of these, so callers can
/// translate failures without matching on individual variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Duplicate key on a create operation.
    AlreadyExists,
    /// Caller is not the recorded owning identity for a mutating operation.
    Unauthorized,
    /// Referenced key is absent.
    NotFound,
    /// Transfer target lacks a seller record.
    InvalidTarget,
}

/// Errors from registry state transitions.
///
/// All mutating operations fail atomically; a returned error means no state
/// changed. Read-only lookups never produce these - they signal absence with
/// `Option::None` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Manufacturer ID is already registered.
    #[error("manufacturer ID already exists: {0}")]
    ManufacturerExists(String),

    /// Serial number is already registered.
    #[error("product already registered: {0}")]
    ProductExists(String),

    /// Caller already holds a seller record.
    #[error("seller already registered: {0}")]
    SellerExists(Identity),

    /// Caller is not the registered manufacturer for the given ID (or the ID
    /// is unknown - indistinguishable by design).
    #[error("not an authorized manufacturer for {0}")]
    NotAuthorizedManufacturer(String),

    /// Serial number is not registered.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Caller is not the manufacturer recorded on the product.
    #[error("not the product manufacturer: {0}")]
    NotProductManufacturer(String),

    /// Transfer target has no seller record.
    #[error("seller not registered: {0}")]
    SellerNotRegistered(Identity),
}

impl RegistryError {
    /// Returns the failure kind for transport-layer mapping.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ManufacturerExists(_) | Self::ProductExists(_) | Self::SellerExists(_) => {
                ErrorKind::AlreadyExists
            }
            Self::NotAuthorizedManufacturer(_) | Self::NotProductManufacturer(_) => {
                ErrorKind::Unauthorized
            }
            Self::ProductNotFound(_) => ErrorKind::NotFound,
            Self::SellerNotRegistered(_) => ErrorKind::InvalidTarget,
        }
    }
}

// =============================================================================
// STORE ERRORS
// =============================================================================

/// Errors from the storage port.
///
/// The store knows nothing about the domain; the service translates these
/// into [`RegistryError`]s with the failing operation's context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insert would overwrite an existing record.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// No record under the given key.
    #[error("key not found: {0}")]
    NotFound(String),
}

// =============================================================================
// PARSE ERRORS
// =============================================================================

/// Errors from parsing the text form of an [`Identity`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseIdentityError {
    /// Wrong number of hex digits (40 expected).
    #[error("invalid identity length: expected 40 hex digits, got {0}")]
    InvalidLength(usize),

    /// Non-hex characters in the digit string.
    #[error("identity is not valid hex")]
    InvalidHex,
}

/// Errors from parsing a decimal amount string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    /// No digits at all.
    #[error("empty amount")]
    Empty,

    /// A character outside `0-9` (amounts are unsigned).
    #[error("amount contains a non-digit character")]
    InvalidDigit,

    /// More fractional digits than the fixed-point precision holds.
    #[error("too many decimal places: {0} > 18")]
    TooManyDecimals(usize),

    /// Value exceeds the 256-bit range.
    #[error("amount overflows 256 bits")]
    Overflow,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::ProductExists("SN001".to_string());
        assert_eq!(err.to_string(), "product already registered: SN001");

        let err = RegistryError::SellerNotRegistered(Identity::ZERO);
        assert_eq!(
            err.to_string(),
            "seller not registered: 0x0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            RegistryError::ManufacturerExists("MAN001".into()).kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(
            RegistryError::ProductExists("SN001".into()).kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(
            RegistryError::SellerExists(Identity::ZERO).kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(
            RegistryError::NotAuthorizedManufacturer("MAN001".into()).kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            RegistryError::NotProductManufacturer("SN001".into()).kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            RegistryError::ProductNotFound("SN001".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            RegistryError::SellerNotRegistered(Identity::ZERO).kind(),
            ErrorKind::InvalidTarget
        );
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::DuplicateKey("SN001".to_string());
        assert_eq!(err.to_string(), "duplicate key: SN001");
    }
}
