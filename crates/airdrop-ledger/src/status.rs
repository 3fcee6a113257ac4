//! # Claim Status
//!
//! ```text
//! UNCLAIMED ──claim()──▶ CLAIMED
//! ```
//!
//! `Claimed` is terminal. Nothing in the ledger, including a root
//! rotation or a snapshot restore, moves an identity back to `Unclaimed`.

use serde::{Deserialize, Serialize};

/// Replay-guard state of one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// No successful claim yet.
    Unclaimed,
    /// Allotment withdrawn (terminal).
    Claimed,
}

impl ClaimStatus {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Claimed)
    }

    /// The canonical string name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unclaimed => "UNCLAIMED",
            Self::Claimed => "CLAIMED",
        }
    }
}

impl From<bool> for ClaimStatus {
    fn from(claimed: bool) -> Self {
        if claimed {
            Self::Claimed
        } else {
            Self::Unclaimed
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
