//! # Deploy Subcommand
//!
//! Creates the token, funds the vault from the deployer, and writes a fresh
//! ledger to the state file.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use airdrop_ledger::{ClaimLedger, InMemoryToken, TokenLedger};

use crate::config::DeploymentConfig;
use crate::state::{self, FileLedger};

/// Arguments for the `airdrop deploy` subcommand.
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Deployment configuration (YAML or JSON).
    #[arg(long)]
    pub config: PathBuf,

    /// Overwrite an existing state file.
    #[arg(long)]
    pub force: bool,
}

/// Execute the deploy subcommand.
pub fn run_deploy(args: &DeployArgs, state_path: &Path) -> Result<u8> {
    let config = DeploymentConfig::load(&args.config)?;
    if state_path.exists() && !args.force {
        bail!(
            "state file already exists: {} (pass --force to replace it)",
            state_path.display()
        );
    }

    let ledger = deploy(&config)?;
    state::save(state_path, &ledger)?;

    println!("OK: deployed airdrop ledger to {}", state_path.display());
    println!("  Admin: {}", ledger.admin());
    println!("  Vault: {}", ledger.vault());
    println!("  Root: {}", ledger.current_root());
    println!(
        "  Token: {} ({}), vault funded with {}",
        config.token.name,
        config.token.symbol,
        ledger.vault_balance()
    );
    Ok(0)
}

/// Build a funded ledger from `config`.
pub fn deploy(config: &DeploymentConfig) -> Result<FileLedger> {
    let token = InMemoryToken::new(
        config.token.name.clone(),
        config.token.symbol.clone(),
        config.token.deployer,
        config.token.initial_supply,
    );
    if !config.funding.is_zero() {
        token
            .transfer(&config.token.deployer, &config.vault, config.funding)
            .context("failed to fund the vault")?;
    }
    tracing::info!(
        admin = %config.admin,
        vault = %config.vault,
        root = %config.initial_root,
        funding = %config.funding,
        "ledger deployed"
    );
    Ok(ClaimLedger::new(config.ledger_config(), token))
}
