//! # Leaf Encoding
//!
//! A leaf commits to one allow-list row. The pre-image is the packed
//! concatenation
//!
//! ```text
//! address (20 bytes) || amount (32 bytes, big-endian, zero-padded)
//! ```
//!
//! and the leaf is `keccak256(pre-image)`.
//!
//! ## Invariant
//!
//! Field order and widths are fixed. A tree built with any other layout
//! yields leaves that simply never verify; the mismatch surfaces as
//! non-membership, never as an error.

use serde::{Deserialize, Serialize};

use airdrop_core::address::ADDRESS_LEN;
use airdrop_core::amount::AMOUNT_WIRE_LEN;
use airdrop_core::{keccak256, Address, Amount, NodeHash};

/// Byte length of the packed leaf pre-image.
pub const LEAF_PREIMAGE_LEN: usize = ADDRESS_LEN + AMOUNT_WIRE_LEN;

/// Pack `(address, amount)` into the fixed 52-byte leaf pre-image.
pub fn encode_leaf(address: &Address, amount: Amount) -> [u8; LEAF_PREIMAGE_LEN] {
    let mut out = [0u8; LEAF_PREIMAGE_LEN];
    out[..ADDRESS_LEN].copy_from_slice(address.as_bytes());
    out[ADDRESS_LEN..].copy_from_slice(&amount.to_be_bytes32());
    out
}

/// Hash the packed pre-image of `(address, amount)`.
pub fn leaf_hash(address: &Address, amount: Amount) -> NodeHash {
    keccak256(&encode_leaf(address, amount))
}

/// One allow-list entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimLeaf {
    /// The claimant identity.
    pub address: Address,
    /// Tokens the claimant may withdraw.
    pub amount: Amount,
}

impl ClaimLeaf {
    pub fn new(address: Address, amount: Amount) -> Self {
        Self { address, amount }
    }

    /// The packed pre-image.
    pub fn encode(&self) -> [u8; LEAF_PREIMAGE_LEN] {
        encode_leaf(&self.address, self.amount)
    }

    /// The leaf hash.
    pub fn hash(&self) -> NodeHash {
        leaf_hash(&self.address, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    #[test]
    fn preimage_layout() {
        let enc = encode_leaf(&addr(0xaa), Amount::new(100));
        assert_eq!(enc.len(), 52);
        assert_eq!(enc[..20], [0xaa; 20]);
        assert_eq!(enc[20..51], [0u8; 31]);
        assert_eq!(enc[51], 100);
    }

    #[test]
    fn leaf_hash_is_keccak_of_preimage() {
        let leaf = ClaimLeaf::new(addr(1), Amount::new(200));
        assert_eq!(leaf.hash(), keccak256(&leaf.encode()));
    }

    #[test]
    fn amount_changes_leaf() {
        assert_ne!(
            leaf_hash(&addr(1), Amount::new(100)),
            leaf_hash(&addr(1), Amount::new(101))
        );
    }

    #[test]
    fn address_changes_leaf() {
        assert_ne!(
            leaf_hash(&addr(1), Amount::new(100)),
            leaf_hash(&addr(2), Amount::new(100))
        );
    }

    #[test]
    fn known_vector_zero_leaf() {
        // keccak256 over 52 zero bytes.
        let expected = keccak256(&[0u8; 52]);
        assert_eq!(leaf_hash(&Address::ZERO, Amount::ZERO), expected);
    }
}
