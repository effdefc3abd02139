//! # Call Payloads
//!
//! The serialized call surface of the container: one [`Call`] variant per
//! mutator, and the [`CallReceipt`] the caller observes.
//!
//! A call is the unit of work the hosting environment delivers: it commits
//! its entire effect or none of it. The validations in the domain layer run
//! before any field write, which is what makes the all-or-nothing guarantee
//! hold.

use crate::errors::ContainerError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vault_types::{Address, Bytes};

// =============================================================================
// CALL
// =============================================================================

/// A mutator invocation, as delivered by the hosting environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Call {
    /// Overwrite `positive_number`.
    SetPositiveNumber(i64),
    /// Overwrite `negative_number`.
    SetNegativeNumber(i64),
    /// Flip `is_active`.
    ToggleActive,
    /// Set `wallet` and `recipient` jointly.
    SetWallet(Address),
    /// Store right-padded fixed data (fails over 32 bytes).
    SetFixedData(Bytes),
    /// Replace `dynamic_data` wholesale.
    SetDynamicData(Bytes),
    /// Set `current_state` from an ordinal (fails outside {0, 1, 2}).
    SetState(u8),
}

impl Call {
    /// Human-readable operation name for logs and receipts.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetPositiveNumber(_) => "setPositiveNumber",
            Self::SetNegativeNumber(_) => "setNegativeNumber",
            Self::ToggleActive => "toggleActive",
            Self::SetWallet(_) => "setWallet",
            Self::SetFixedData(_) => "setFixedData",
            Self::SetDynamicData(_) => "setDynamicData",
            Self::SetState(_) => "setState",
        }
    }
}

// =============================================================================
// CALL RECEIPT
// =============================================================================

/// Outcome of one call, observed by the external caller.
///
/// A rejected call is terminal for that invocation; retry, if desired,
/// happens at the caller with corrected input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallReceipt {
    /// Correlation id the caller supplied.
    pub correlation_id: Uuid,
    /// Operation name.
    pub operation: String,
    /// Whether the call committed.
    pub success: bool,
    /// Rejection reason when `success` is false.
    pub revert_reason: Option<String>,
}

impl CallReceipt {
    /// Receipt for a committed call.
    #[must_use]
    pub fn accepted(correlation_id: Uuid, call: &Call) -> Self {
        Self {
            correlation_id,
            operation: call.name().to_string(),
            success: true,
            revert_reason: None,
        }
    }

    /// Receipt for a rejected call.
    #[must_use]
    pub fn rejected(correlation_id: Uuid, call: &Call, error: &ContainerError) -> Self {
        Self {
            correlation_id,
            operation: call.name().to_string(),
            success: false,
            revert_reason: Some(error.to_string()),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
