//! # Sorted-Pair Merkle Tree
//!
//! Level-by-level construction over pre-hashed leaves:
//!
//! ```text
//! level[0]   = leaves (input order, not sorted)
//! level[k+1] = [hash_pair(level[k][2i], level[k][2i+1]) ...]
//! ```
//!
//! When a level has an odd number of nodes, the last node is carried up to
//! the next level unchanged (it is neither duplicated nor hashed with
//! itself). The proof for a leaf therefore skips levels where its ancestor
//! has no sibling.

use airdrop_core::{Address, Amount, NodeHash};
use airdrop_crypto::{hash_pair, leaf_hash, MerkleProof};

use crate::allowlist::Allowlist;
use crate::error::TreeError;

/// A fully materialized tree, kept off-line to hand out proofs.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// `levels[0]` are the leaves; the last level holds only the root.
    levels: Vec<Vec<NodeHash>>,
}

impl MerkleTree {
    /// Build from leaf hashes in the given order.
    pub fn from_leaves(leaves: Vec<NodeHash>) -> Result<Self, TreeError> {
        if leaves.is_empty() {
            return Err(TreeError::Empty);
        }

        let mut levels = vec![leaves];
        while let Some(level) = levels.last() {
            if level.len() <= 1 {
                break;
            }
            let next: Vec<NodeHash> = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    _ => pair[0],
                })
                .collect();
            levels.push(next);
        }

        Ok(Self { levels })
    }

    /// Build from an allow-list, hashing each row into its leaf.
    pub fn from_allowlist(list: &Allowlist) -> Result<Self, TreeError> {
        let leaves = list
            .entries()
            .iter()
            .map(|e| leaf_hash(&e.address, e.amount))
            .collect();
        Self::from_leaves(leaves)
    }

    /// The published root.
    pub fn root(&self) -> NodeHash {
        // Construction guarantees a non-empty top level.
        self.levels
            .last()
            .and_then(|top| top.first())
            .copied()
            .unwrap_or(NodeHash::ZERO)
    }

    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// Number of hashing levels above the leaves (0 for a single leaf).
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn leaves(&self) -> &[NodeHash] {
        self.levels.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sibling path for the leaf at `index`.
    pub fn proof(&self, index: usize) -> Result<MerkleProof, TreeError> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(TreeError::IndexOutOfRange { index, leaf_count });
        }

        let mut siblings = Vec::with_capacity(self.depth());
        let mut pos = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = pos ^ 1;
            if let Some(node) = level.get(sibling) {
                siblings.push(*node);
            }
            pos /= 2;
        }
        Ok(MerkleProof::new(siblings))
    }

    /// Sibling path for the leaf committing to `(address, amount)`.
    pub fn proof_for(&self, address: &Address, amount: Amount) -> Result<MerkleProof, TreeError> {
        let target = leaf_hash(address, amount);
        let index = self
            .leaves()
            .iter()
            .position(|leaf| *leaf == target)
            .ok_or(TreeError::UnknownClaimant(*address))?;
        self.proof(index)
    }
}
