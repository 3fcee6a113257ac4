//! # Claim Subcommand
//!
//! Submits one claim against the ledger in the state file. The proof comes
//! either from `--proof` directly or from the caller's entry in a
//! distribution document.
//!
//! A rejected claim prints the reason, leaves the state file untouched,
//! and exits `1`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use airdrop_core::{Address, Amount};
use airdrop_crypto::MerkleProof;
use airdrop_ledger::TokenLedger;

use crate::state;
use crate::tree::load_distribution;

/// Arguments for the `airdrop claim` subcommand.
#[derive(Args, Debug)]
pub struct ClaimArgs {
    /// Claiming identity.
    #[arg(long)]
    pub caller: Address,

    /// Amount to claim, in base units.
    #[arg(long)]
    pub amount: Amount,

    /// Comma-separated sibling hashes.
    #[arg(long, conflicts_with = "distribution", required_unless_present = "distribution")]
    pub proof: Option<MerkleProof>,

    /// Distribution document to take the caller's proof from.
    #[arg(long)]
    pub distribution: Option<PathBuf>,
}

/// Execute the claim subcommand.
pub fn run_claim(args: &ClaimArgs, state_path: &Path) -> Result<u8> {
    let proof = resolve_proof(args)?;
    let ledger = state::load(state_path)?;

    match ledger.claim(&args.caller, args.amount, proof.siblings()) {
        Ok(record) => {
            state::save(state_path, &ledger)?;
            println!("OK: {} claimed {}", args.caller, args.amount);
            println!("  Event: #{}", record.sequence);
            println!("  Balance: {}", ledger.token().balance_of(&args.caller));
            Ok(0)
        }
        Err(err) => {
            println!("FAIL: {err}");
            Ok(1)
        }
    }
}

fn resolve_proof(args: &ClaimArgs) -> Result<MerkleProof> {
    match (&args.proof, &args.distribution) {
        (Some(proof), _) => Ok(proof.clone()),
        (None, Some(path)) => {
            let dist = load_distribution(path)?;
            let entry = dist
                .entry_for(&args.caller)
                .with_context(|| format!("no proof for {} in {}", args.caller, path.display()))?;
            Ok(entry.proof.clone())
        }
        (None, None) => bail!("either --proof or --distribution is required"),
    }
}
