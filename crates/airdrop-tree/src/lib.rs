//! # airdrop-tree: Off-line Distribution Tooling
//!
//! Builds the commitment that the claim ledger verifies against. This is
//! the "external process" side of the airdrop: it runs once, off-line,
//! over the full allow-list and publishes a root plus one proof per
//! claimant. The ledger itself never sees the allow-list.
//!
//! - **Allow-list** (`allowlist.rs`): `address,amount` rows with duplicate
//!   and zero-address rejection.
//! - **Tree** (`tree.rs`): level-by-level sorted-pair tree. Leaves keep
//!   their input order; an odd trailing node is promoted unchanged.
//! - **Distribution** (`distribution.rs`): root, total, and per-claimant
//!   proofs as a JSON document.
//!
//! Trees built here are byte-compatible with the common JavaScript
//! tooling configured with sorted pairs and leaves hashed from
//! `solidityPack(["address","uint256"])`.

#![forbid(unsafe_code)]

pub mod allowlist;
pub mod distribution;
pub mod error;
pub mod tree;

pub use allowlist::Allowlist;
pub use distribution::{ClaimEntry, Distribution};
pub use error::TreeError;
pub use tree::MerkleTree;
