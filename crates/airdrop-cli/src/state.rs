//! # State File
//!
//! Ledger and token snapshots persisted between CLI invocations:
//!
//! ```json
//! {
//!   "digest": "<sha256 hex of the compact JSON encoding of `state`>",
//!   "state": { "version": 1, "ledger": { … }, "token": { … } }
//! }
//! ```
//!
//! The digest catches accidental edits and truncation. A file whose digest
//! does not match is refused outright; there is no repair path.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use airdrop_ledger::{ClaimLedger, InMemoryToken, LedgerSnapshot, TokenSnapshot};

/// Current state layout version.
pub const STATE_VERSION: u32 = 1;

/// The ledger type every CLI command operates on.
pub type FileLedger = ClaimLedger<InMemoryToken>;

/// Everything needed to rebuild a [`FileLedger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub version: u32,
    pub ledger: LedgerSnapshot,
    pub token: TokenSnapshot,
}

#[derive(Debug, Serialize, Deserialize)]
struct StateEnvelope {
    digest: String,
    state: PersistedState,
}

impl PersistedState {
    pub fn capture(ledger: &FileLedger) -> Self {
        Self {
            version: STATE_VERSION,
            ledger: ledger.snapshot(),
            token: ledger.token().snapshot(),
        }
    }

    /// SHA-256 over the compact JSON encoding, hex.
    pub fn digest(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self).context("failed to encode ledger state")?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }

    pub fn into_ledger(self) -> Result<FileLedger> {
        let token =
            InMemoryToken::from_snapshot(self.token).context("token snapshot is inconsistent")?;
        ClaimLedger::restore(self.ledger, token).context("ledger snapshot is inconsistent")
    }
}

/// Write `ledger` to `path`, replacing any previous contents.
pub fn save(path: &Path, ledger: &FileLedger) -> Result<()> {
    let state = PersistedState::capture(ledger);
    let envelope = StateEnvelope {
        digest: state.digest()?,
        state,
    };
    let json = serde_json::to_string_pretty(&envelope)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create state directory: {}", parent.display()))?;
    }
    std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("failed to write state file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), digest = %envelope.digest, "state saved");
    Ok(())
}

/// Read, integrity-check, and restore the ledger at `path`.
pub fn load(path: &Path) -> Result<FileLedger> {
    if !path.exists() {
        bail!(
            "state file not found: {} (run `airdrop deploy` first)",
            path.display()
        );
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read state file: {}", path.display()))?;
    let envelope: StateEnvelope = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse state file: {}", path.display()))?;

    if envelope.state.version != STATE_VERSION {
        bail!(
            "unsupported state version {} (expected {STATE_VERSION})",
            envelope.state.version
        );
    }
    let computed = envelope.state.digest()?;
    if computed != envelope.digest {
        bail!(
            "state file integrity check failed: {} (recorded {}, computed {computed})",
            path.display(),
            envelope.digest
        );
    }
    tracing::debug!(path = %path.display(), digest = %computed, "state loaded");
    envelope.state.into_ledger()
}
