//! # Hex Parsing Errors
//!
//! Errors produced when decoding `0x…` text into fixed-width primitives.

use thiserror::Error;

/// Errors from parsing hex-encoded primitive values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Input contained a non-hex character.
    #[error("invalid hex digit in input")]
    InvalidDigit,

    /// Decoded byte length did not match the target width.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Width the target type requires.
        expected: usize,
        /// Width actually decoded.
        actual: usize,
    },

    /// Input had an odd number of hex digits.
    #[error("odd number of hex digits")]
    OddLength,
}

impl From<hex::FromHexError> for HexError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::OddLength => Self::OddLength,
            _ => Self::InvalidDigit,
        }
    }
}

/// Strips an optional `0x`/`0X` prefix from hex text.
#[must_use]
pub(crate) fn strip_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}
