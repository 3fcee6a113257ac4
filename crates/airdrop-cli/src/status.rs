//! # Status Subcommand

use std::path::Path;

use anyhow::Result;
use clap::Args;

use airdrop_core::Address;
use airdrop_ledger::{EventRecord, TokenLedger};

use crate::state::{self, FileLedger};

/// Arguments for the `airdrop status` subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Show one identity's claim status and token balance instead of the
    /// ledger summary.
    #[arg(long)]
    pub address: Option<Address>,

    /// Print the event log.
    #[arg(long)]
    pub events: bool,
}

/// Execute the status subcommand.
pub fn run_status(args: &StatusArgs, state_path: &Path) -> Result<u8> {
    let ledger = state::load(state_path)?;

    if let Some(address) = &args.address {
        println!("Address: {address}");
        println!("  Status: {}", ledger.status(address));
        println!("  Balance: {}", ledger.token().balance_of(address));
        return Ok(0);
    }

    println!("Ledger: {}", state_path.display());
    println!("  Root: {}", ledger.current_root());
    println!("  Admin: {}", ledger.admin());
    println!("  Vault: {}", ledger.vault());
    println!("  Vault balance: {}", ledger.vault_balance());
    println!("  Claimed: {}", ledger.claimed_count());
    if let Some(last) = last_event(&ledger) {
        println!("  Last event: #{} {} at {}", last.sequence, last.event.kind(), last.recorded_at);
    }

    if args.events {
        for record in ledger.events() {
            let line = serde_json::to_string(&record)?;
            println!("    {line}");
        }
    }
    Ok(0)
}

/// Most recent event, if any.
pub fn last_event(ledger: &FileLedger) -> Option<EventRecord> {
    ledger.events().pop()
}
