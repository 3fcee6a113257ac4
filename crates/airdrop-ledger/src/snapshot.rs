//! # Ledger Snapshots
//!
//! A [`LedgerSnapshot`] is the complete serializable state of a
//! [`ClaimLedger`] apart from the token collaborator, which persists its
//! own state. The CLI writes one after every operation and restores it on
//! the next invocation.
//!
//! Restoring validates the snapshot before building a ledger: the claimed
//! set may not repeat an identity, event sequence numbers must run
//! `0, 1, 2, …`, and every `Claimed` event must name an identity in the
//! claimed set. The last check keeps a hand-edited file from quietly
//! moving an identity back to `Unclaimed`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use airdrop_core::{Address, NodeHash};

use crate::error::SnapshotError;
use crate::event::{EventRecord, LedgerEvent};
use crate::ledger::{ClaimLedger, LedgerConfig};
use crate::token::TokenLedger;

/// Serializable ledger state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub admin: Address,
    pub vault: Address,
    /// Root published at the time of the snapshot.
    pub root: NodeHash,
    /// Claimed identities in ascending byte order.
    pub claimed: Vec<Address>,
    pub events: Vec<EventRecord>,
}

impl<T: TokenLedger> ClaimLedger<T> {
    /// Capture the ledger's state. Takes the root write guard, so the
    /// snapshot never contains a half-finished claim.
    pub fn snapshot(&self) -> LedgerSnapshot {
        let root = self.root.write();
        let mut claimed: Vec<Address> = self.claimed.read().iter().copied().collect();
        claimed.sort();
        LedgerSnapshot {
            admin: self.admin,
            vault: self.vault,
            root: *root,
            claimed,
            events: self.events.lock().clone(),
        }
    }

    /// Rebuild a ledger from `snapshot` over `token`.
    pub fn restore(snapshot: LedgerSnapshot, token: T) -> Result<Self, SnapshotError> {
        let mut claimed = HashSet::with_capacity(snapshot.claimed.len());
        for identity in &snapshot.claimed {
            if !claimed.insert(*identity) {
                return Err(SnapshotError::DuplicateClaim(*identity));
            }
        }

        for (expected, record) in snapshot.events.iter().enumerate() {
            let expected = expected as u64;
            if record.sequence != expected {
                return Err(SnapshotError::EventSequence {
                    expected,
                    found: record.sequence,
                });
            }
            if let LedgerEvent::Claimed { identity, .. } = &record.event {
                if !claimed.contains(identity) {
                    return Err(SnapshotError::UnrecordedClaim {
                        sequence: record.sequence,
                        identity: *identity,
                    });
                }
            }
        }

        let config = LedgerConfig {
            admin: snapshot.admin,
            vault: snapshot.vault,
            initial_root: snapshot.root,
        };
        Ok(Self::from_parts(config, token, claimed, snapshot.events))
    }
}
