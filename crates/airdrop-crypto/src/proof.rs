//! # Merkle Membership Proofs
//!
//! A proof is the ordered list of sibling hashes from a leaf up to the
//! root. Verification recomputes the root by folding the path:
//!
//! ```text
//! node = leaf
//! for sibling in proof:
//!     node = keccak256(min(node, sibling) || max(node, sibling))
//! member  <=>  node == root
//! ```
//!
//! Sorting each pair before hashing makes the path position-free: the
//! proof carries no left/right flags, and a tree built with the same rule
//! verifies regardless of where a leaf sits.
//!
//! ## Failure policy
//!
//! Verification never errors. An empty path against a multi-leaf root, a
//! path longer than [`MAX_PROOF_DEPTH`], a zero root, or any tampered
//! sibling all produce `false`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use airdrop_core::digest::HASH_LEN;
use airdrop_core::{keccak256, Address, Amount, NodeHash, ValidationError};

use crate::leaf::leaf_hash;

/// Longest sibling path accepted. A tree of 2^256 leaves cannot exist, so
/// anything longer is garbage.
pub const MAX_PROOF_DEPTH: usize = 256;

// ---------------------------------------------------------------------------
// Node hashing
// ---------------------------------------------------------------------------

/// Hash two nodes in canonical order: the lexicographically smaller one
/// goes first. `hash_pair(a, b) == hash_pair(b, a)`.
pub fn hash_pair(a: &NodeHash, b: &NodeHash) -> NodeHash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut input = [0u8; HASH_LEN * 2];
    input[..HASH_LEN].copy_from_slice(lo.as_bytes());
    input[HASH_LEN..].copy_from_slice(hi.as_bytes());
    keccak256(&input)
}

/// Fold `proof` onto `leaf` and return the recomputed root.
pub fn process_proof(leaf: &NodeHash, proof: &[NodeHash]) -> NodeHash {
    proof
        .iter()
        .fold(*leaf, |node, sibling| hash_pair(&node, sibling))
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Check that `leaf` is committed under `root` via `proof`.
pub fn verify_leaf_hash(root: &NodeHash, leaf: &NodeHash, proof: &[NodeHash]) -> bool {
    if root.is_zero() || proof.len() > MAX_PROOF_DEPTH {
        return false;
    }
    process_proof(leaf, proof) == *root
}

/// Check that `(address, amount)` is committed under `root` via `proof`.
///
/// This is the membership decision used by the claim ledger.
pub fn verify(root: &NodeHash, address: &Address, amount: Amount, proof: &[NodeHash]) -> bool {
    verify_leaf_hash(root, &leaf_hash(address, amount), proof)
}

// ---------------------------------------------------------------------------
// Proof container
// ---------------------------------------------------------------------------

/// An owned sibling path.
///
/// Serializes as a JSON array of `0x`-prefixed hex strings, the format the
/// distribution file hands to claimants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerkleProof(Vec<NodeHash>);

impl MerkleProof {
    pub fn new(siblings: Vec<NodeHash>) -> Self {
        Self(siblings)
    }

    /// The sibling hashes, leaf side first.
    pub fn siblings(&self) -> &[NodeHash] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the raw sibling list.
    pub fn into_inner(self) -> Vec<NodeHash> {
        self.0
    }

    /// Verify this path for `(address, amount)` against `root`.
    pub fn verify(&self, root: &NodeHash, address: &Address, amount: Amount) -> bool {
        verify(root, address, amount, &self.0)
    }

    /// Parse a comma-separated list of hex hashes. An empty string is the
    /// empty proof.
    pub fn parse_list(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        trimmed
            .split(',')
            .map(NodeHash::from_hex)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<Vec<NodeHash>> for MerkleProof {
    fn from(siblings: Vec<NodeHash>) -> Self {
        Self(siblings)
    }
}

impl AsRef<[NodeHash]> for MerkleProof {
    fn as_ref(&self) -> &[NodeHash] {
        &self.0
    }
}

impl fmt::Display for MerkleProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sibling) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{sibling}")?;
        }
        Ok(())
    }
}

impl FromStr for MerkleProof {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_list(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::ClaimLeaf;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    /// Two-leaf tree: root = hash_pair(l1, l2).
    fn two_leaf_fixture() -> (ClaimLeaf, ClaimLeaf, NodeHash) {
        let a = ClaimLeaf::new(addr(1), Amount::new(100));
        let b = ClaimLeaf::new(addr(2), Amount::new(200));
        let root = hash_pair(&a.hash(), &b.hash());
        (a, b, root)
    }

    // -----------------------------------------------------------------------
    // Pair hashing
    // -----------------------------------------------------------------------

    #[test]
    fn hash_pair_is_commutative() {
        let x = keccak256(b"x");
        let y = keccak256(b"y");
        assert_eq!(hash_pair(&x, &y), hash_pair(&y, &x));
    }

    #[test]
    fn hash_pair_puts_smaller_first() {
        let x = keccak256(b"x");
        let y = keccak256(b"y");
        let (lo, hi) = if x < y { (x, y) } else { (y, x) };
        let mut concat = lo.as_bytes().to_vec();
        concat.extend_from_slice(hi.as_bytes());
        assert_eq!(hash_pair(&x, &y), keccak256(&concat));
    }

    // -----------------------------------------------------------------------
    // Verification
    // -----------------------------------------------------------------------

    #[test]
    fn both_leaves_of_two_leaf_tree_verify() {
        let (a, b, root) = two_leaf_fixture();
        assert!(verify(&root, &a.address, a.amount, &[b.hash()]));
        assert!(verify(&root, &b.address, b.amount, &[a.hash()]));
    }

    #[test]
    fn wrong_amount_is_non_member() {
        let (a, b, root) = two_leaf_fixture();
        assert!(!verify(&root, &a.address, Amount::new(101), &[b.hash()]));
    }

    #[test]
    fn wrong_identity_is_non_member() {
        let (a, b, root) = two_leaf_fixture();
        assert!(!verify(&root, &addr(9), a.amount, &[b.hash()]));
    }

    #[test]
    fn empty_proof_only_for_single_leaf_tree() {
        let (a, _, root) = two_leaf_fixture();
        assert!(!verify(&root, &a.address, a.amount, &[]));

        let single_root = a.hash();
        assert!(verify(&single_root, &a.address, a.amount, &[]));
    }

    #[test]
    fn tampered_sibling_fails() {
        let (a, b, root) = two_leaf_fixture();
        let mut bytes = *b.hash().as_bytes();
        bytes[0] ^= 0x01;
        assert!(!verify(&root, &a.address, a.amount, &[NodeHash::new(bytes)]));
    }

    #[test]
    fn extra_sibling_fails() {
        let (a, b, root) = two_leaf_fixture();
        assert!(!verify(&root, &a.address, a.amount, &[b.hash(), b.hash()]));
    }

    #[test]
    fn zero_root_never_verifies() {
        let (a, b, _) = two_leaf_fixture();
        assert!(!verify(&NodeHash::ZERO, &a.address, a.amount, &[b.hash()]));
    }

    #[test]
    fn overlong_proof_rejected() {
        let (a, b, _) = two_leaf_fixture();
        let proof = vec![b.hash(); MAX_PROOF_DEPTH + 1];
        let root = process_proof(&a.hash(), &proof);
        assert!(!verify(&root, &a.address, a.amount, &proof));
    }

    #[test]
    fn process_proof_of_empty_path_is_leaf() {
        let leaf = keccak256(b"leaf");
        assert_eq!(process_proof(&leaf, &[]), leaf);
    }

    // -----------------------------------------------------------------------
    // MerkleProof container
    // -----------------------------------------------------------------------

    #[test]
    fn parse_list_and_display_agree() {
        let (_, b, _) = two_leaf_fixture();
        let proof = MerkleProof::new(vec![b.hash(), keccak256(b"z")]);
        let text = proof.to_string();
        assert_eq!(text.matches(',').count(), 1);
        assert_eq!(MerkleProof::parse_list(&text).unwrap(), proof);
    }

    #[test]
    fn parse_list_empty_is_empty_proof() {
        assert!(MerkleProof::parse_list("  ").unwrap().is_empty());
    }

    #[test]
    fn parse_list_rejects_bad_hash() {
        assert!(MerkleProof::parse_list("0x1234").is_err());
    }

    #[test]
    fn container_verify_delegates() {
        let (a, b, root) = two_leaf_fixture();
        let proof = MerkleProof::from(vec![b.hash()]);
        assert!(proof.verify(&root, &a.address, a.amount));
        assert_eq!(proof.len(), 1);
    }

    #[test]
    fn serde_is_array_of_hex() {
        let proof = MerkleProof::new(vec![keccak256(b"s")]);
        let json = serde_json::to_value(&proof).unwrap();
        assert!(json.is_array());
        assert!(json[0].as_str().unwrap().starts_with("0x"));
    }
}
