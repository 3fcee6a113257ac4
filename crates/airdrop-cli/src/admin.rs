//! # Administrator Subcommands
//!
//! `update-root` and `withdraw`. Both name the caller explicitly; the
//! ledger rejects anyone other than its administrator.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use airdrop_core::{Address, Amount, NodeHash};
use airdrop_ledger::ClaimError;

use crate::state::{self, FileLedger};

/// Arguments for `airdrop update-root`.
#[derive(Args, Debug)]
pub struct UpdateRootArgs {
    /// Calling identity.
    #[arg(long)]
    pub caller: Address,

    /// Replacement Merkle root.
    #[arg(long)]
    pub root: NodeHash,
}

/// Arguments for `airdrop withdraw`.
#[derive(Args, Debug)]
pub struct WithdrawArgs {
    /// Calling identity.
    #[arg(long)]
    pub caller: Address,

    /// Amount to move from the vault to the administrator.
    #[arg(long)]
    pub amount: Amount,
}

/// Execute `airdrop update-root`.
pub fn run_update_root(args: &UpdateRootArgs, state_path: &Path) -> Result<u8> {
    apply(state_path, |ledger| {
        let previous = ledger.current_root();
        ledger.update_root(&args.caller, args.root)?;
        println!("OK: root updated");
        println!("  Previous: {previous}");
        println!("  Current: {}", args.root);
        Ok(())
    })
}

/// Execute `airdrop withdraw`.
pub fn run_withdraw(args: &WithdrawArgs, state_path: &Path) -> Result<u8> {
    apply(state_path, |ledger| {
        ledger.withdraw(&args.caller, args.amount)?;
        println!("OK: withdrew {} to {}", args.amount, ledger.admin());
        println!("  Vault balance: {}", ledger.vault_balance());
        Ok(())
    })
}

/// Load, run `op`, and save only if it succeeded.
fn apply<F>(state_path: &Path, op: F) -> Result<u8>
where
    F: FnOnce(&FileLedger) -> Result<(), ClaimError>,
{
    let ledger = state::load(state_path)?;
    match op(&ledger) {
        Ok(()) => {
            state::save(state_path, &ledger)?;
            Ok(0)
        }
        Err(err) => {
            println!("FAIL: {err}");
            Ok(1)
        }
    }
}
