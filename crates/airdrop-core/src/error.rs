//! # Validation Errors
//!
//! Errors raised when a domain primitive is constructed from untrusted
//! text. Each variant carries the rejected input so that operators can
//! diagnose a malformed allow-list or config without guesswork.

use thiserror::Error;

/// Validation errors for the domain primitive newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is not valid hexadecimal.
    #[error("invalid hex for {kind}: \"{value}\"")]
    InvalidHex {
        /// The primitive being parsed ("address", "hash").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Input decoded to the wrong number of bytes.
    #[error("invalid {kind} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// The primitive being parsed.
        kind: &'static str,
        /// Required byte length.
        expected: usize,
        /// Byte length actually supplied.
        actual: usize,
    },

    /// Amount is not a non-negative integer that fits in 128 bits.
    #[error("invalid amount: \"{0}\" (expected an unsigned integer below 2^128)")]
    InvalidAmount(String),

    /// The all-zero address is not a valid claimant or administrator.
    #[error("zero address not allowed")]
    ZeroAddress,
}
