//! # Claim Ledger
//!
//! Holds the published root, the replay guard for every identity, and the
//! administrator identity. Funds live in the token collaborator under the
//! ledger's `vault` address.
//!
//! ## Lock order
//!
//! `root` → identity stripe → `claimed` → `events`. Every path acquires in
//! this order and none re-enters a lock it already holds.
//!
//! - `claim` holds the root read guard and its identity stripe for its
//!   whole run, so the check-and-set on the replay guard and the transfer
//!   that follows are never interleaved with another claim for the same
//!   identity, nor with a root rotation or withdrawal.
//! - `update_root` and `withdraw` take the root write guard, which waits
//!   for every in-flight claim and blocks new ones until they finish.

use std::collections::HashSet;

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use airdrop_core::{Address, Amount, NodeHash};
use airdrop_crypto::verify;

use crate::error::ClaimError;
use crate::event::{EventRecord, LedgerEvent};
use crate::status::ClaimStatus;
use crate::token::TokenLedger;

/// Number of per-identity lock stripes.
pub const CLAIM_LOCK_STRIPES: usize = 64;

/// Construction-time parameters of a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// The only identity allowed to rotate the root and withdraw funds.
    pub admin: Address,
    /// Token account that holds the airdrop funds.
    pub vault: Address,
    /// Root published at deployment.
    pub initial_root: NodeHash,
}

/// One-shot claim ledger over a token collaborator `T`.
#[derive(Debug)]
pub struct ClaimLedger<T: TokenLedger> {
    pub(crate) admin: Address,
    pub(crate) vault: Address,
    pub(crate) token: T,
    pub(crate) root: RwLock<NodeHash>,
    pub(crate) claimed: RwLock<HashSet<Address>>,
    pub(crate) stripes: [Mutex<()>; CLAIM_LOCK_STRIPES],
    pub(crate) events: Mutex<Vec<EventRecord>>,
}

impl<T: TokenLedger> ClaimLedger<T> {
    pub fn new(config: LedgerConfig, token: T) -> Self {
        Self::from_parts(config, token, HashSet::new(), Vec::new())
    }

    pub(crate) fn from_parts(
        config: LedgerConfig,
        token: T,
        claimed: HashSet<Address>,
        events: Vec<EventRecord>,
    ) -> Self {
        Self {
            admin: config.admin,
            vault: config.vault,
            token,
            root: RwLock::new(config.initial_root),
            claimed: RwLock::new(claimed),
            stripes: std::array::from_fn(|_| Mutex::new(())),
            events: Mutex::new(events),
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Withdraw `amount` to `identity` if `proof` places the pair under the
    /// current root and the identity has not claimed before.
    ///
    /// The vault account is never a claimant. Otherwise checks run in the
    /// order `AlreadyClaimed`, `InvalidProof`, `InsufficientFunds`. The replay guard is set before the transfer is
    /// requested and cleared again if the transfer fails, so every error
    /// leaves the ledger as it was.
    pub fn claim(
        &self,
        identity: &Address,
        amount: Amount,
        proof: &[NodeHash],
    ) -> Result<EventRecord, ClaimError> {
        if *identity == self.vault {
            warn!(%identity, %amount, reason = "vault_claimant", "claim rejected");
            return Err(ClaimError::VaultClaimant { vault: self.vault });
        }

        let root = self.root.read();
        let _stripe = self.stripe(identity).lock();

        if self.claimed.read().contains(identity) {
            warn!(%identity, %amount, reason = "already_claimed", "claim rejected");
            return Err(ClaimError::AlreadyClaimed {
                identity: *identity,
            });
        }

        if !verify(&root, identity, amount, proof) {
            warn!(%identity, %amount, reason = "invalid_proof", "claim rejected");
            return Err(ClaimError::InvalidProof);
        }

        let available = self.token.balance_of(&self.vault);
        if available < amount {
            warn!(%identity, %amount, %available, reason = "insufficient_funds", "claim rejected");
            return Err(ClaimError::InsufficientFunds {
                requested: amount,
                available,
            });
        }

        self.claimed.write().insert(*identity);

        if let Err(err) = self.token.transfer(&self.vault, identity, amount) {
            self.claimed.write().remove(identity);
            warn!(%identity, %amount, error = %err, reason = "transfer_failed", "claim reverted");
            return Err(err.into());
        }

        let record = self.append(LedgerEvent::Claimed {
            identity: *identity,
            amount,
        });
        info!(%identity, %amount, sequence = record.sequence, "airdrop claimed");
        Ok(record)
    }

    /// Replace the published root. Claim records are not touched: an
    /// identity that claimed under the old root stays claimed.
    pub fn update_root(
        &self,
        caller: &Address,
        new_root: NodeHash,
    ) -> Result<EventRecord, ClaimError> {
        self.ensure_admin(caller, "update_root")?;

        let mut root = self.root.write();
        let previous = *root;
        *root = new_root;

        let record = self.append(LedgerEvent::RootUpdated {
            previous,
            current: new_root,
        });
        info!(%previous, current = %new_root, "merkle root updated");
        Ok(record)
    }

    /// Move `amount` of residual funds from the vault to the administrator.
    pub fn withdraw(&self, caller: &Address, amount: Amount) -> Result<EventRecord, ClaimError> {
        self.ensure_admin(caller, "withdraw")?;

        let _root = self.root.write();
        let available = self.token.balance_of(&self.vault);
        if available < amount {
            warn!(%amount, %available, reason = "insufficient_funds", "withdraw rejected");
            return Err(ClaimError::InsufficientFunds {
                requested: amount,
                available,
            });
        }
        self.token
            .transfer(&self.vault, &self.admin, amount)
            .map_err(|err| {
                warn!(%amount, error = %err, reason = "transfer_failed", "withdraw rejected");
                ClaimError::from(err)
            })?;

        let record = self.append(LedgerEvent::Withdrawn {
            to: self.admin,
            amount,
        });
        info!(%amount, to = %self.admin, "residual funds withdrawn");
        Ok(record)
    }

    // ------------------------------------------------------------------
    // State reads
    // ------------------------------------------------------------------

    pub fn current_root(&self) -> NodeHash {
        *self.root.read()
    }

    /// Whether `identity` has claimed. Waits for an in-flight claim by the
    /// same identity to finish.
    pub fn has_claimed(&self, identity: &Address) -> bool {
        let _stripe = self.stripe(identity).lock();
        self.claimed.read().contains(identity)
    }

    pub fn status(&self, identity: &Address) -> ClaimStatus {
        ClaimStatus::from(self.has_claimed(identity))
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed.read().len()
    }

    pub fn admin(&self) -> &Address {
        &self.admin
    }

    pub fn vault(&self) -> &Address {
        &self.vault
    }

    pub fn token(&self) -> &T {
        &self.token
    }

    /// Funds currently available for claims and withdrawal.
    pub fn vault_balance(&self) -> Amount {
        self.token.balance_of(&self.vault)
    }

    /// Copy of the event log, oldest first.
    pub fn events(&self) -> Vec<EventRecord> {
        self.events.lock().clone()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn ensure_admin(&self, caller: &Address, operation: &'static str) -> Result<(), ClaimError> {
        if *caller != self.admin {
            warn!(%caller, operation, reason = "unauthorized", "admin operation rejected");
            return Err(ClaimError::Unauthorized { caller: *caller });
        }
        Ok(())
    }

    fn stripe(&self, identity: &Address) -> &Mutex<()> {
        let folded = identity
            .as_bytes()
            .iter()
            .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(usize::from(*b)));
        &self.stripes[folded % CLAIM_LOCK_STRIPES]
    }

    fn append(&self, event: LedgerEvent) -> EventRecord {
        let mut events = self.events.lock();
        let record = EventRecord {
            sequence: events.len() as u64,
            recorded_at: chrono::Utc::now(),
            event,
        };
        events.push(record.clone());
        record
    }
}
