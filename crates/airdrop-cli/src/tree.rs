//! # Tree Subcommand
//!
//! Off-line distribution tooling. `build` turns an allow-list CSV into a
//! distribution document (root, total, and every claimant's proof);
//! `proof` looks one claimant up in that document.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use airdrop_core::Address;
use airdrop_tree::{Allowlist, Distribution};

/// Arguments for the `airdrop tree` subcommand.
#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(subcommand)]
    pub command: TreeCommand,
}

#[derive(Subcommand, Debug)]
pub enum TreeCommand {
    /// Build a distribution document from an allow-list.
    Build {
        /// Allow-list file with one `address,amount` row per claimant.
        #[arg(long)]
        input: PathBuf,
        /// Output path. Printed to stdout when omitted.
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Print one claimant's amount and proof.
    Proof {
        /// Distribution document produced by `tree build`.
        #[arg(long)]
        distribution: PathBuf,
        /// Claimant address.
        #[arg(long)]
        address: Address,
    },
}

/// Execute the tree subcommand.
pub fn run_tree(args: &TreeArgs) -> Result<u8> {
    match &args.command {
        TreeCommand::Build { input, out } => cmd_build(input, out.as_deref()),
        TreeCommand::Proof {
            distribution,
            address,
        } => cmd_proof(distribution, address),
    }
}

/// Read a distribution document from disk and check every entry still
/// verifies against its root.
pub fn load_distribution(path: &Path) -> Result<Distribution> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read distribution: {}", path.display()))?;
    let dist = Distribution::from_json(&content)
        .with_context(|| format!("failed to parse distribution: {}", path.display()))?;
    let invalid = dist.invalid_entries();
    if !invalid.is_empty() {
        bail!(
            "distribution {} has {} entries that do not verify against root {}",
            path.display(),
            invalid.len(),
            dist.root
        );
    }
    tracing::debug!(path = %path.display(), claims = dist.claims.len(), "distribution loaded");
    Ok(dist)
}

fn cmd_build(input: &Path, out: Option<&Path>) -> Result<u8> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read allow-list: {}", input.display()))?;
    let list = Allowlist::parse(&text)
        .with_context(|| format!("invalid allow-list: {}", input.display()))?;
    let dist = Distribution::build(&list)?;
    let json = dist.to_json_pretty()?;

    match out {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write distribution: {}", path.display()))?;
            println!("OK: wrote distribution to {}", path.display());
            println!("  Root: {}", dist.root);
            println!("  Claimants: {}", dist.claims.len());
            println!("  Total: {}", dist.total);
        }
        None => println!("{json}"),
    }
    Ok(0)
}

fn cmd_proof(distribution: &Path, address: &Address) -> Result<u8> {
    let dist = load_distribution(distribution)?;
    let entry = dist.entry_for(address)?;
    println!("Address: {}", entry.address);
    println!("  Amount: {}", entry.amount);
    println!("  Root: {}", dist.root);
    println!("  Proof: {}", entry.proof);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWLIST: &str = "address,amount\n\
        0x1111111111111111111111111111111111111111,100\n\
        0x2222222222222222222222222222222222222222,200\n";

    #[test]
    fn build_writes_loadable_distribution() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("allowlist.csv");
        let out = dir.path().join("distribution.json");
        std::fs::write(&input, ALLOWLIST).unwrap();

        assert_eq!(cmd_build(&input, Some(&out)).unwrap(), 0);
        let dist = load_distribution(&out).unwrap();
        assert_eq!(dist.claims.len(), 2);
        assert_eq!(dist.total.get(), 300);
    }

    #[test]
    fn proof_for_unknown_address_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("allowlist.csv");
        let out = dir.path().join("distribution.json");
        std::fs::write(&input, ALLOWLIST).unwrap();
        cmd_build(&input, Some(&out)).unwrap();

        assert_eq!(cmd_proof(&out, &Address::new([0x11; 20])).unwrap(), 0);
        assert!(cmd_proof(&out, &Address::new([0x33; 20])).is_err());
    }

    #[test]
    fn edited_distribution_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("allowlist.csv");
        let out = dir.path().join("distribution.json");
        std::fs::write(&input, ALLOWLIST).unwrap();
        cmd_build(&input, Some(&out)).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        std::fs::write(&out, content.replace("\"200\"", "\"2000\"")).unwrap();
        let err = load_distribution(&out).unwrap_err();
        assert!(err.to_string().contains("do not verify"));
    }

    #[test]
    fn malformed_allowlist_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("allowlist.csv");
        std::fs::write(&input, "not-an-address,1\n").unwrap();
        let err = cmd_build(&input, None).unwrap_err();
        assert!(err.to_string().contains("invalid allow-list"));
    }
}
