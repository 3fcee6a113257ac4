//! # airdrop-core: Foundational Types for the Merkle Airdrop
//!
//! Defines the primitives every other crate in the workspace builds on.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for domain primitives.** [`Address`], [`Amount`] and
//!    [`NodeHash`] are distinct types. An amount cannot be hashed as if it
//!    were an identity, and a node hash cannot be passed where an address
//!    is expected.
//!
//! 2. **Fixed wire widths.** An address is always 20 bytes and an amount is
//!    always encoded as 32 big-endian bytes, so the leaf pre-image matches
//!    the off-line tree builder byte for byte.
//!
//! 3. **One hash function.** [`keccak256`] is the only digest used for
//!    leaves and interior nodes.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `airdrop-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

#![forbid(unsafe_code)]

pub mod address;
pub mod amount;
pub mod digest;
pub mod error;

pub use address::Address;
pub use amount::Amount;
pub use digest::{keccak256, NodeHash};
pub use error::ValidationError;
