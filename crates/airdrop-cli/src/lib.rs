//! # airdrop-cli: Command-Line Front End
//!
//! Provides the `airdrop` binary. Tree commands work on plain files; the
//! ledger commands operate on a single state file (`--state`, default
//! `airdrop-state.json`) holding the ledger and token snapshots.
//!
//! ## Subcommands
//!
//! - `airdrop tree build` / `airdrop tree proof`: distribution tooling.
//! - `airdrop verify`: stand-alone proof check against a root.
//! - `airdrop deploy`: create a funded ledger from a deployment config.
//! - `airdrop claim`: submit `(amount, proof)` for a caller.
//! - `airdrop update-root` / `airdrop withdraw`: administrator operations.
//! - `airdrop status`: ledger summary, or one identity's claim status.
//!
//! ```bash
//! airdrop tree build --input allowlist.csv --out distribution.json
//! airdrop deploy --config deployment.yaml
//! airdrop claim --caller 0x… --amount 100 --distribution distribution.json
//! ```
//!
//! ## Exit codes
//!
//! `0` on success, `1` when the ledger rejects an operation, a proof does
//! not verify, or any I/O or parse error occurs.

pub mod admin;
pub mod claim;
pub mod config;
pub mod deploy;
pub mod state;
pub mod status;
pub mod tree;
pub mod verify;

/// State file used when `--state` is not given.
pub const DEFAULT_STATE_FILE: &str = "airdrop-state.json";
