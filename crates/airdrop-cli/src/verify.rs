//! # Verify Subcommand
//!
//! Checks a proof against a root without touching any ledger state.
//! Exit code is `0` for a member, `1` otherwise.

use anyhow::Result;
use clap::Args;

use airdrop_core::{Address, Amount, NodeHash};
use airdrop_crypto::{leaf_hash, MerkleProof};

/// Arguments for the `airdrop verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Published Merkle root.
    #[arg(long)]
    pub root: NodeHash,

    /// Claimant address.
    #[arg(long)]
    pub address: Address,

    /// Claimed amount, in base units.
    #[arg(long)]
    pub amount: Amount,

    /// Comma-separated sibling hashes, leaf side first. Empty for a
    /// single-leaf tree.
    #[arg(long, default_value = "")]
    pub proof: MerkleProof,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let leaf = leaf_hash(&args.address, args.amount);
    tracing::debug!(%leaf, depth = args.proof.len(), "verifying proof");

    if args.proof.verify(&args.root, &args.address, args.amount) {
        println!("OK: {} is entitled to {} under {}", args.address, args.amount, args.root);
        Ok(0)
    } else {
        println!("FAIL: proof does not verify against {}", args.root);
        println!("  Leaf: {leaf}");
        Ok(1)
    }
}
