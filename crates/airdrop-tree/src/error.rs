//! # Tree Tooling Errors

use thiserror::Error;

use airdrop_core::{Address, ValidationError};

/// Errors from allow-list parsing, tree building, and proof lookup.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The allow-list has no rows.
    #[error("allow-list is empty")]
    Empty,

    /// A row is not `address,amount`.
    #[error("line {line}: expected 'address,amount', got '{content}'")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending text.
        content: String,
    },

    /// A field failed primitive validation.
    #[error("line {line}: {source}")]
    InvalidField {
        /// 1-based line number, or entry position for in-memory input.
        line: usize,
        /// The underlying validation failure.
        #[source]
        source: ValidationError,
    },

    /// The same address appears twice.
    #[error("duplicate address {address} (first seen on line {first_line}, again on line {line})")]
    DuplicateAddress {
        /// The repeated address.
        address: Address,
        /// Line of the first occurrence.
        first_line: usize,
        /// Line of the repeat.
        line: usize,
    },

    /// The sum of all amounts does not fit in an `Amount`.
    #[error("allow-list total overflows")]
    TotalOverflow,

    /// Proof requested for a leaf index past the end.
    #[error("leaf index {index} out of bounds for tree with {leaf_count} leaves")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of leaves.
        leaf_count: usize,
    },

    /// No allow-list row for this address.
    #[error("address {0} is not in the allow-list")]
    UnknownClaimant(Address),

    /// Distribution document could not be (de)serialized.
    #[error("distribution JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
