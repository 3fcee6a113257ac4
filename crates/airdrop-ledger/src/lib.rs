//! # airdrop-ledger: One-Shot Claim Ledger
//!
//! The stateful half of the airdrop. A [`ClaimLedger`] holds the published
//! root, remembers which identities have claimed, and moves tokens out of
//! its vault through a [`TokenLedger`] collaborator.
//!
//! ## Operations
//!
//! - `claim(identity, amount, proof)`: verify membership against the
//!   current root, set the replay guard, transfer. Exactly one success per
//!   identity, ever.
//! - `update_root(caller, root)`: administrator only; claim records are
//!   left untouched.
//! - `withdraw(caller, amount)`: administrator only; moves residual funds
//!   from the vault to the administrator.
//!
//! ## Per-identity state machine
//!
//! ```text
//! Unclaimed ──claim()──▶ Claimed (terminal)
//! ```
//!
//! ## Failure guarantee
//!
//! Every rejection (`InvalidProof`, `AlreadyClaimed`, `InsufficientFunds`,
//! `Unauthorized`, `TransferRejected`) leaves the ledger exactly as it was:
//! no claim record set, no tokens moved, no event appended.
//!
//! ## Concurrency
//!
//! The ledger is `Send + Sync` and meant to be shared behind an `Arc`.
//! Claims for the same identity serialize on a per-identity lock stripe;
//! root rotation and withdrawal hold the root lock exclusively, which
//! excludes every in-flight claim.

#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod ledger;
pub mod snapshot;
pub mod status;
pub mod token;

pub use error::{ClaimError, SnapshotError, TokenError};
pub use event::{EventRecord, LedgerEvent};
pub use ledger::{ClaimLedger, LedgerConfig, CLAIM_LOCK_STRIPES};
pub use snapshot::LedgerSnapshot;
pub use status::ClaimStatus;
pub use token::{InMemoryToken, TokenLedger, TokenSnapshot};
