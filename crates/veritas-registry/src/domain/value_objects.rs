//! # Value Objects
//!
//! Immutable domain primitives for the authenticity registry.
//! These types represent concepts defined by their value, not identity.

use crate::domain::errors::{ParseAmountError, ParseIdentityError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// Re-export U256 from primitive-types for fixed-point arithmetic
pub use primitive_types::U256;

// =============================================================================
// IDENTITY (20 bytes)
// =============================================================================

/// A 20-byte principal identity.
///
/// Every mutating registry operation carries the identity of the caller, and
/// authorization is a plain equality check against the identity stored with
/// the owning record. The canonical text form is `0x` followed by 40
/// lowercase hex digits; the prefix is optional on parse.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Identity(pub [u8; 20]);

impl Identity {
    /// The zero identity (0x0000...0000). Used as the "absent" sentinel in
    /// wire representations of unregistered records.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an identity from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an identity from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 20 {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Identity {
    type Err = ParseIdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() != 40 {
            return Err(ParseIdentityError::InvalidLength(digits.len()));
        }
        let bytes = hex::decode(digits).map_err(|_| ParseIdentityError::InvalidHex)?;
        // Length checked above, decode yields exactly 20 bytes
        Self::from_slice(&bytes).ok_or(ParseIdentityError::InvalidHex)
    }
}

impl From<[u8; 20]> for Identity {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Identity> for [u8; 20] {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// TOKEN AMOUNT (fixed-point, 18 decimals)
// =============================================================================

/// An unsigned fixed-point amount with 18 decimal places, backed by [`U256`].
///
/// Prices enter the system as decimal strings (`"1.0"`, `"0.25"`) and leave
/// it the same way; internally they are held in base units (`10^-18`). The
/// text form always carries at least one fractional digit with trailing
/// zeros trimmed, so one whole token renders as `"1.0"`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Number of decimal places.
    pub const DECIMALS: u32 = 18;

    /// A zero amount.
    #[must_use]
    pub fn zero() -> Self {
        Self(U256::zero())
    }

    /// Creates an amount from raw base units (`10^-18` of a token).
    #[must_use]
    pub fn from_base_units(units: U256) -> Self {
        Self(units)
    }

    /// Returns the raw base units.
    #[must_use]
    pub fn base_units(&self) -> U256 {
        self.0
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn scale() -> U256 {
        U256::exp10(Self::DECIMALS as usize)
    }
}

impl FromStr for TokenAmount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (int_part, frac_part) = match s.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (s, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseAmountError::Empty);
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ParseAmountError::InvalidDigit);
        }
        if frac_part.len() > Self::DECIMALS as usize {
            return Err(ParseAmountError::TooManyDecimals(frac_part.len()));
        }

        let int_units = if int_part.is_empty() {
            U256::zero()
        } else {
            U256::from_dec_str(int_part).map_err(|_| ParseAmountError::Overflow)?
        };
        let frac_units = if frac_part.is_empty() {
            U256::zero()
        } else {
            // Right-pad to 18 digits: "5" in the fractional position is 0.5
            let scaled = format!("{frac_part:0<18}");
            U256::from_dec_str(&scaled).map_err(|_| ParseAmountError::Overflow)?
        };

        int_units
            .checked_mul(Self::scale())
            .and_then(|units| units.checked_add(frac_units))
            .map(Self)
            .ok_or(ParseAmountError::Overflow)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int = self.0 / Self::scale();
        let frac = self.0 % Self::scale();
        let frac_digits = format!("{:0>18}", frac.to_string());
        let trimmed = frac_digits.trim_end_matches('0');
        let frac_out = if trimmed.is_empty() { "0" } else { trimmed };
        write!(f, "{int}.{frac_out}")
    }
}

impl fmt::Debug for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenAmount({self})")
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// TESTS
// =============================================================================
