//! # airdrop CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use airdrop_cli::admin::{run_update_root, run_withdraw, UpdateRootArgs, WithdrawArgs};
use airdrop_cli::claim::{run_claim, ClaimArgs};
use airdrop_cli::deploy::{run_deploy, DeployArgs};
use airdrop_cli::status::{run_status, StatusArgs};
use airdrop_cli::tree::{run_tree, TreeArgs};
use airdrop_cli::verify::{run_verify, VerifyArgs};

/// Merkle airdrop toolchain.
///
/// Builds distribution documents from allow-lists, verifies membership
/// proofs, and drives a file-backed claim ledger.
#[derive(Parser, Debug)]
#[command(name = "airdrop", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Ledger state file.
    #[arg(long, global = true, default_value = airdrop_cli::DEFAULT_STATE_FILE)]
    state: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Allow-list to distribution tooling (build, proof).
    Tree(TreeArgs),

    /// Check a proof against a root without touching ledger state.
    Verify(VerifyArgs),

    /// Create a funded ledger from a deployment configuration.
    Deploy(DeployArgs),

    /// Claim an allotment with a membership proof.
    Claim(ClaimArgs),

    /// Replace the published root (administrator only).
    UpdateRoot(UpdateRootArgs),

    /// Recover residual vault funds (administrator only).
    Withdraw(WithdrawArgs),

    /// Show the ledger summary or one identity's status.
    Status(StatusArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!(state = %cli.state.display(), "airdrop CLI starting");

    let result = match &cli.command {
        Commands::Tree(args) => run_tree(args),
        Commands::Verify(args) => run_verify(args),
        Commands::Deploy(args) => run_deploy(args, &cli.state),
        Commands::Claim(args) => run_claim(args, &cli.state),
        Commands::UpdateRoot(args) => run_update_root(args, &cli.state),
        Commands::Withdraw(args) => run_withdraw(args, &cli.state),
        Commands::Status(args) => run_status(args, &cli.state),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
