//! # Distribution Document
//!
//! The artifact published alongside the root: every claimant's
//! entitlement and sibling path. Claimants look themselves up here and
//! submit `(amount, proof)` to the ledger.
//!
//! ```json
//! {
//!   "root": "0x…",
//!   "total": "300",
//!   "claims": [
//!     { "address": "0x…", "amount": "100", "proof": ["0x…"] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use airdrop_core::{Address, Amount, NodeHash};
use airdrop_crypto::MerkleProof;

use crate::allowlist::Allowlist;
use crate::error::TreeError;
use crate::tree::MerkleTree;

/// One claimant's entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimEntry {
    pub address: Address,
    pub amount: Amount,
    pub proof: MerkleProof,
}

/// Root plus every claimant's proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Root to publish to the ledger.
    pub root: NodeHash,
    /// Sum of all entitlements; the amount the ledger must be funded with.
    pub total: Amount,
    /// Entries in allow-list order.
    pub claims: Vec<ClaimEntry>,
}

impl Distribution {
    /// Build the tree for `list` and generate every proof.
    pub fn build(list: &Allowlist) -> Result<Self, TreeError> {
        let tree = MerkleTree::from_allowlist(list)?;
        let claims = list
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, e)| {
                Ok(ClaimEntry {
                    address: e.address,
                    amount: e.amount,
                    proof: tree.proof(idx)?,
                })
            })
            .collect::<Result<Vec<_>, TreeError>>()?;

        Ok(Self {
            root: tree.root(),
            total: list.total()?,
            claims,
        })
    }

    /// Look up a claimant's entry.
    pub fn entry_for(&self, address: &Address) -> Result<&ClaimEntry, TreeError> {
        self.claims
            .iter()
            .find(|c| c.address == *address)
            .ok_or(TreeError::UnknownClaimant(*address))
    }

    /// Addresses whose proof does not verify against `root`.
    ///
    /// Empty for any document produced by [`Distribution::build`]; a
    /// non-empty result means the file was edited or the root swapped.
    pub fn invalid_entries(&self) -> Vec<Address> {
        self.claims
            .iter()
            .filter(|c| !c.proof.verify(&self.root, &c.address, c.amount))
            .map(|c| c.address)
            .collect()
    }

    pub fn to_json_pretty(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self, TreeError> {
        Ok(serde_json::from_str(s)?)
    }
}
