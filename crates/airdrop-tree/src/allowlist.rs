//! # Allow-list Parsing
//!
//! Text format, one entitlement per line:
//!
//! ```text
//! # comment
//! address,amount
//! 0x70997970c51812dc3a010c7d01b50e0d17dc79c8,100
//! 0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc,200
//! ```
//!
//! Blank lines and `#` comments are skipped. An optional `address,amount`
//! header is accepted as the first row. Row order is preserved, since it
//! fixes each leaf's position in the tree.

use std::collections::HashMap;

use airdrop_core::{Address, Amount, ValidationError};
use airdrop_crypto::ClaimLeaf;

use crate::error::TreeError;

/// A validated, ordered allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allowlist {
    entries: Vec<ClaimLeaf>,
}

impl Allowlist {
    /// Parse the text format described in the module docs.
    pub fn parse(text: &str) -> Result<Self, TreeError> {
        let mut rows = Vec::new();
        let mut seen_row = false;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if !seen_row && trimmed.eq_ignore_ascii_case("address,amount") {
                seen_row = true;
                continue;
            }
            seen_row = true;

            let mut parts = trimmed.split(',').map(str::trim);
            let (Some(addr), Some(amount), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(TreeError::MalformedLine {
                    line,
                    content: trimmed.to_string(),
                });
            };

            let address = Address::parse_nonzero(addr)
                .map_err(|source| TreeError::InvalidField { line, source })?;
            let amount =
                Amount::parse(amount).map_err(|source| TreeError::InvalidField { line, source })?;
            rows.push((line, ClaimLeaf::new(address, amount)));
        }

        Self::from_numbered(rows)
    }

    /// Build from entries already in memory. Line numbers in errors are the
    /// 1-based entry positions.
    pub fn from_entries(entries: Vec<ClaimLeaf>) -> Result<Self, TreeError> {
        let mut rows = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.into_iter().enumerate() {
            if entry.address.is_zero() {
                return Err(TreeError::InvalidField {
                    line: idx + 1,
                    source: ValidationError::ZeroAddress,
                });
            }
            rows.push((idx + 1, entry));
        }
        Self::from_numbered(rows)
    }

    fn from_numbered(rows: Vec<(usize, ClaimLeaf)>) -> Result<Self, TreeError> {
        if rows.is_empty() {
            return Err(TreeError::Empty);
        }
        let mut first_seen: HashMap<Address, usize> = HashMap::with_capacity(rows.len());
        let mut entries = Vec::with_capacity(rows.len());
        for (line, entry) in rows {
            if let Some(&first_line) = first_seen.get(&entry.address) {
                return Err(TreeError::DuplicateAddress {
                    address: entry.address,
                    first_line,
                    line,
                });
            }
            first_seen.insert(entry.address, line);
            entries.push(entry);
        }
        Ok(Self { entries })
    }

    /// Entries in allow-list order.
    pub fn entries(&self) -> &[ClaimLeaf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entitlements: the funding the ledger needs.
    pub fn total(&self) -> Result<Amount, TreeError> {
        self.entries
            .iter()
            .try_fold(Amount::ZERO, |acc, e| acc.checked_add(e.amount))
            .ok_or(TreeError::TotalOverflow)
    }
}
