//! # Token Amounts
//!
//! Amounts are unsigned integers held in a `u128`. On the wire (the leaf
//! pre-image) an amount is always 32 big-endian bytes, left zero-padded,
//! which is the `uint256` packing used by the off-line tree builder.
//!
//! Serialized amounts are decimal strings so that JSON consumers never
//! round them through a float. Deserialization also accepts bare integers
//! for hand-written YAML configs.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Byte width of an encoded amount.
pub const AMOUNT_WIRE_LEN: usize = 32;

/// A token quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u128);

impl Amount {
    /// Zero tokens.
    pub const ZERO: Amount = Amount(0);

    /// Wrap a raw quantity.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// The raw quantity.
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Whether this amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `self + rhs`, or `None` on overflow.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// `self - rhs`, or `None` if `rhs > self`.
    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Encode as 32 big-endian bytes.
    pub fn to_be_bytes32(&self) -> [u8; AMOUNT_WIRE_LEN] {
        let mut out = [0u8; AMOUNT_WIRE_LEN];
        out[AMOUNT_WIRE_LEN - 16..].copy_from_slice(&self.0.to_be_bytes());
        out
    }

    /// Parse a decimal string.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidAmount(s.to_string()));
        }
        trimmed
            .parse::<u128>()
            .map(Amount)
            .map_err(|_| ValidationError::InvalidAmount(s.to_string()))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unsigned integer or a decimal string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Ok(Amount::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Amount, E> {
        Ok(Amount(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        u64::try_from(v)
            .map(Amount::from)
            .map_err(|_| E::custom(ValidationError::InvalidAmount(v.to_string())))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        Amount::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_encoding_is_32_bytes_big_endian() {
        let enc = Amount::new(100).to_be_bytes32();
        assert_eq!(enc.len(), 32);
        assert_eq!(enc[..31], [0u8; 31]);
        assert_eq!(enc[31], 100);

        let enc = Amount::new(0x0102).to_be_bytes32();
        assert_eq!(enc[30], 0x01);
        assert_eq!(enc[31], 0x02);
    }

    #[test]
    fn max_amount_fills_low_half_only() {
        let enc = Amount::new(u128::MAX).to_be_bytes32();
        assert_eq!(enc[..16], [0u8; 16]);
        assert_eq!(enc[16..], [0xffu8; 16]);
    }

    #[test]
    fn parse_accepts_decimal_only() {
        assert_eq!(Amount::parse("300").unwrap(), Amount::new(300));
        assert_eq!(Amount::parse(" 7 ").unwrap(), Amount::new(7));
        assert!(Amount::parse("").is_err());
        assert!(Amount::parse("-1").is_err());
        assert!(Amount::parse("1.5").is_err());
        assert!(Amount::parse("0x10").is_err());
        // 2^128 overflows.
        assert!(Amount::parse("340282366920938463463374607431768211456").is_err());
    }

    #[test]
    fn checked_arithmetic() {
        let a = Amount::new(100);
        assert_eq!(a.checked_sub(Amount::new(40)), Some(Amount::new(60)));
        assert_eq!(a.checked_sub(Amount::new(101)), None);
        assert_eq!(Amount::new(u128::MAX).checked_add(Amount::new(1)), None);
    }

    #[test]
    fn serde_string_out_number_or_string_in() {
        let json = serde_json::to_string(&Amount::new(200)).unwrap();
        assert_eq!(json, "\"200\"");
        let from_str: Amount = serde_json::from_str("\"200\"").unwrap();
        let from_num: Amount = serde_json::from_str("200").unwrap();
        assert_eq!(from_str, from_num);
        assert!(serde_json::from_str::<Amount>("-3").is_err());
    }
}
