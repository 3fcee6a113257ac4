//! # Node Hashes and Keccak-256
//!
//! Every leaf and interior node of the allow-list tree is a 32-byte
//! Keccak-256 digest. [`NodeHash`] wraps those bytes; the published root is
//! a `NodeHash` as well.
//!
//! Keccak-256 here is the original Keccak padding used by Ethereum, not the
//! NIST SHA3-256 variant. The two produce different digests for the same
//! input, and only the former matches externally built trees.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};

use crate::error::ValidationError;

/// Byte width of a node hash.
pub const HASH_LEN: usize = 32;

/// A 32-byte node of the allow-list tree (leaf, interior node, or root).
///
/// Ordering is lexicographic over the raw bytes, which is the ordering used
/// by sorted-pair hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeHash([u8; HASH_LEN]);

impl NodeHash {
    /// The all-zero hash.
    pub const ZERO: NodeHash = NodeHash([0u8; HASH_LEN]);

    /// Wrap raw digest bytes.
    pub const fn new(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Access the raw bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_LEN]
    }

    /// Lowercase hex without the `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse 64 hex characters, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        let cleaned = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(cleaned).map_err(|_| ValidationError::InvalidHex {
            kind: "hash",
            value: s.to_string(),
        })?;
        let arr: [u8; HASH_LEN] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| ValidationError::InvalidLength {
                    kind: "hash",
                    expected: HASH_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(arr))
    }
}

impl From<[u8; HASH_LEN]> for NodeHash {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for NodeHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for NodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl FromStr for NodeHash {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for NodeHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute the Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> NodeHash {
    let hash = Keccak256::digest(data);
    let mut bytes = [0u8; HASH_LEN];
    bytes.copy_from_slice(&hash);
    NodeHash(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak256_empty_known_vector() {
        // Ethereum's well-known keccak256("") value.
        assert_eq!(
            keccak256(b"").to_hex(),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn keccak256_is_not_nist_sha3() {
        use sha3::Sha3_256;
        let nist = Sha3_256::digest(b"");
        assert_ne!(keccak256(b"").as_bytes()[..], nist[..]);
    }

    #[test]
    fn hex_roundtrip_with_and_without_prefix() {
        let h = keccak256(b"leaf");
        let bare = h.to_hex();
        let prefixed = h.to_string();
        assert!(prefixed.starts_with("0x"));
        assert_eq!(NodeHash::from_hex(&bare).unwrap(), h);
        assert_eq!(prefixed.parse::<NodeHash>().unwrap(), h);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = NodeHash::from_hex("0xaabb").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLength {
                kind: "hash",
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(matches!(
            NodeHash::from_hex(&"zz".repeat(32)),
            Err(ValidationError::InvalidHex { .. })
        ));
    }

    #[test]
    fn ordering_is_bytewise() {
        let mut lo = [0u8; 32];
        let mut hi = [0u8; 32];
        lo[0] = 0x01;
        hi[0] = 0x02;
        assert!(NodeHash::new(lo) < NodeHash::new(hi));
        lo[0] = 0x02;
        lo[31] = 0xff;
        assert!(NodeHash::new(lo) > NodeHash::new(hi));
    }

    #[test]
    fn serde_uses_prefixed_hex_string() {
        let h = keccak256(b"root");
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, format!("\"{h}\""));
        let back: NodeHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
    }

    #[test]
    fn zero_hash() {
        assert!(NodeHash::ZERO.is_zero());
        assert!(!keccak256(b"x").is_zero());
    }
}
