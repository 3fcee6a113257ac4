//! # Ledger Events
//!
//! Successful operations append an [`EventRecord`] for external indexers.
//! `Claimed` is emitted for every successful claim; root rotation and
//! withdrawal are recorded as well so the log alone reconstructs the
//! ledger's history. Rejected operations append nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use airdrop_core::{Address, Amount, NodeHash};

/// An observable ledger state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// `identity` withdrew its `amount` allotment.
    Claimed { identity: Address, amount: Amount },
    /// The administrator replaced the published root.
    RootUpdated { previous: NodeHash, current: NodeHash },
    /// The administrator recovered `amount` from the vault.
    Withdrawn { to: Address, amount: Amount },
}

impl LedgerEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Claimed { .. } => "claimed",
            Self::RootUpdated { .. } => "root_updated",
            Self::Withdrawn { .. } => "withdrawn",
        }
    }
}

/// A sequenced, timestamped event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the log, starting at 0.
    pub sequence: u64,
    pub recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: LedgerEvent,
}
