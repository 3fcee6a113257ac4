//! # Ledger Errors
//!
//! Every [`ClaimError`] is a local, caller-recoverable rejection. None of
//! them poisons the ledger, and each one is raised before any state has
//! changed (or after a complete rollback).

use thiserror::Error;

use airdrop_core::{Address, Amount};

/// Rejection of a ledger operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    /// The proof does not place `(identity, amount)` under the current root.
    #[error("invalid Merkle proof")]
    InvalidProof,

    /// The identity has already withdrawn its allotment.
    #[error("airdrop already claimed by {identity}")]
    AlreadyClaimed {
        /// The repeat claimant.
        identity: Address,
    },

    /// The vault holds less than the requested amount.
    #[error("insufficient funds: requested {requested}, vault holds {available}")]
    InsufficientFunds {
        /// Amount the operation tried to move.
        requested: Amount,
        /// Vault balance at the time of the check.
        available: Amount,
    },

    /// An administrative operation was called by someone other than the
    /// administrator.
    #[error("caller {caller} is not the administrator")]
    Unauthorized {
        /// The rejected caller.
        caller: Address,
    },

    /// The vault account tried to claim its own funds.
    #[error("vault {vault} cannot claim from itself")]
    VaultClaimant {
        /// The ledger's vault account.
        vault: Address,
    },

    /// The token collaborator refused the transfer for a reason other than
    /// balance.
    #[error("token transfer rejected: {0}")]
    TransferRejected(String),
}

impl From<TokenError> for ClaimError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InsufficientBalance {
                requested,
                available,
                ..
            } => Self::InsufficientFunds {
                requested,
                available,
            },
            other => Self::TransferRejected(other.to_string()),
        }
    }
}

/// Failure reported by a [`TokenLedger`](crate::token::TokenLedger).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Sender balance is below the transfer amount.
    #[error("{holder} holds {available}, cannot send {requested}")]
    InsufficientBalance {
        /// The sending account.
        holder: Address,
        /// Amount requested.
        requested: Amount,
        /// Amount actually held.
        available: Amount,
    },

    /// Crediting the recipient would overflow its balance.
    #[error("balance overflow crediting {0}")]
    Overflow(Address),

    /// Any other refusal by the token implementation.
    #[error("{0}")]
    Rejected(String),
}

/// A snapshot that cannot be restored into a ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The claimed set lists an identity twice.
    #[error("identity {0} appears twice in the claimed set")]
    DuplicateClaim(Address),

    /// A `Claimed` event names an identity missing from the claimed set.
    #[error("event #{sequence} records a claim by {identity}, which is not marked claimed")]
    UnrecordedClaim {
        /// Sequence number of the offending event.
        sequence: u64,
        /// The identity in the event.
        identity: Address,
    },

    /// Event sequence numbers are not `0, 1, 2, …`.
    #[error("event log out of order: expected sequence {expected}, found {found}")]
    EventSequence {
        /// Next expected sequence number.
        expected: u64,
        /// Sequence number found.
        found: u64,
    },
}
