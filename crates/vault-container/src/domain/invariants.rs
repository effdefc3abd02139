//! # Domain Invariants
//!
//! Invariants that MUST hold for every reachable container record. The
//! mutators enforce them at write time; these checks make them observable
//! for tests and debug assertions.
//!
//! - INVARIANT-1: `fixed_data` is exactly 32 bytes in storage
//! - INVARIANT-2: `current_state` is a defined enumeration member
//! - INVARIANT-3: `wallet` and `recipient` are equal after any `set_wallet`
//! - INVARIANT-4: reads have no side effects (enforced by `&self` receivers)

use crate::domain::entities::{ContainerRecord, LifecycleState};
use vault_types::Bytes32;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: Fixed-width storage.
///
/// `Bytes32` makes this structural; the check validates the width constant
/// the rest of the crate relies on.
#[must_use]
pub fn check_fixed_width_invariant(record: &ContainerRecord) -> bool {
    record.fixed_data.as_bytes().len() == Bytes32::WIDTH
}

/// INVARIANT-2: Enumeration membership.
///
/// Every stored state round-trips through its ordinal.
#[must_use]
pub fn check_state_membership_invariant(record: &ContainerRecord) -> bool {
    LifecycleState::try_from(record.current_state.ordinal())
        .map(|state| state == record.current_state)
        .unwrap_or(false)
}

/// INVARIANT-3: Joint wallet/recipient update.
///
/// Once any `set_wallet` has run, the two identifiers are equal. Before the
/// first `set_wallet`, `wallet` is still the zero address and `recipient`
/// may differ (it was seeded at construction).
#[must_use]
pub fn check_wallet_coupling_invariant(record: &ContainerRecord) -> bool {
    record.wallet.is_zero() || record.wallet == record.recipient
}

/// Check all invariants at once.
#[must_use]
pub fn check_all_invariants(record: &ContainerRecord) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_fixed_width_invariant(record) {
        violations.push(InvariantViolation::FixedWidthBroken {
            len: record.fixed_data.as_bytes().len(),
        });
    }

    if !check_state_membership_invariant(record) {
        violations.push(InvariantViolation::StateNotMember {
            ordinal: record.current_state.ordinal(),
        });
    }

    if !check_wallet_coupling_invariant(record) {
        violations.push(InvariantViolation::WalletDecoupled);
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Fixed blob storage is no longer 32 bytes.
    FixedWidthBroken {
        /// Observed width.
        len: usize,
    },
    /// Stored state does not round-trip through its ordinal.
    StateNotMember {
        /// Observed ordinal.
        ordinal: u8,
    },
    /// Wallet was assigned without the recipient following it.
    WalletDecoupled,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FixedWidthBroken { len } => {
                write!(f, "fixed data width broken: {len} bytes")
            }
            Self::StateNotMember { ordinal } => {
                write!(f, "state ordinal {ordinal} is not an enumeration member")
            }
            Self::WalletDecoupled => {
                write!(f, "wallet and recipient diverged after set_wallet")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
