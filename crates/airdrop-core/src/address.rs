//! # Identity Addresses
//!
//! A claimable identity is a 20-byte account address, rendered as
//! `0x`-prefixed lowercase hex. The same type names the administrator and
//! the ledger's own token-holding vault.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Byte width of an address.
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    /// Wrap raw address bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Access the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Whether this is the zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }

    /// Parse 40 hex characters, with or without a `0x` prefix.
    ///
    /// Accepts the zero address; use [`Address::parse_nonzero`] where a
    /// real account is required.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        let cleaned = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        if cleaned.len() != ADDRESS_LEN * 2 {
            return Err(ValidationError::InvalidLength {
                kind: "address",
                expected: ADDRESS_LEN,
                actual: cleaned.len() / 2,
            });
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(cleaned, &mut bytes).map_err(|_| ValidationError::InvalidHex {
            kind: "address",
            value: s.to_string(),
        })?;
        Ok(Self(bytes))
    }

    /// Parse an address and reject the zero address.
    pub fn parse_nonzero(s: &str) -> Result<Self, ValidationError> {
        let address = Self::parse(s)?;
        if address.is_zero() {
            return Err(ValidationError::ZeroAddress);
        }
        Ok(address)
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
