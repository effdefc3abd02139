//! # Error Types
//!
//! All error types for the State Container and its ledger collaborator.

use thiserror::Error;
use vault_types::U256;

// =============================================================================
// CONTAINER ERRORS
// =============================================================================

/// Rejection conditions of the container's mutators.
///
/// Both are detected before any field is written, so a failed call leaves
/// the record exactly as it was. All other mutators are total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// `set_fixed_data` input exceeded the fixed 32-byte width.
    #[error("fixed data too long: {len} > {max} bytes")]
    FixedDataTooLong {
        /// Length of the supplied input.
        len: usize,
        /// Fixed storage width.
        max: usize,
    },

    /// `set_state` ordinal outside the defined enumeration {0, 1, 2}.
    #[error("invalid state ordinal: {0}")]
    InvalidStateOrdinal(u8),
}

// =============================================================================
// LEDGER ERRORS
// =============================================================================

/// Errors from the hosting environment's native value accounting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Sender balance cannot cover the transfer.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Amount the transfer needs.
        required: U256,
        /// Amount the sender holds.
        available: U256,
    },

    /// Credit would overflow the recipient's balance.
    #[error("balance overflow")]
    BalanceOverflow,
}

// =============================================================================
// TESTS
// =============================================================================
