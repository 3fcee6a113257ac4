//! # airdrop-crypto: Membership Proof Verification
//!
//! The pure half of the airdrop: given a claimed `(address, amount)` pair,
//! a sibling path, and the published root, decide membership.
//!
//! - **Leaf encoding** (`leaf.rs`): `address (20 bytes) || amount (32 bytes
//!   big-endian)`, hashed once with Keccak-256.
//! - **Proof verification** (`proof.rs`): fold the sibling path with
//!   sorted-pair hashing and compare against the root.
//!
//! Everything here is a pure function over its inputs. Nothing allocates
//! shared state, so verification is safe to call from any number of
//! threads without synchronization.
//!
//! Tree construction lives in `airdrop-tree`, outside this crate.

#![forbid(unsafe_code)]

pub mod leaf;
pub mod proof;

pub use leaf::{encode_leaf, leaf_hash, ClaimLeaf, LEAF_PREIMAGE_LEN};
pub use proof::{hash_pair, process_proof, verify, verify_leaf_hash, MerkleProof, MAX_PROOF_DEPTH};
