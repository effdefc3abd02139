//! # Core Domain Entities
//!
//! The container record, its lifecycle enumeration, and the aggregate
//! details snapshot. All mutation goes through the record's methods, which
//! validate before writing any field (all-or-nothing).

use crate::domain::services::pad_fixed;
use crate::errors::ContainerError;
use serde::{Deserialize, Serialize};
use vault_types::{Address, Bytes, Bytes32};

// =============================================================================
// LIFECYCLE STATE
// =============================================================================

/// Closed enumeration of container lifecycle states.
///
/// The transition graph is fully connected: any state may be set from any
/// state. The only validation is membership - an ordinal outside {0, 1, 2}
/// is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum LifecycleState {
    /// Ordinal 0.
    Created = 0,
    /// Ordinal 1. Initial state of every new record.
    #[default]
    Active = 1,
    /// Ordinal 2.
    Inactive = 2,
}

impl LifecycleState {
    /// Returns the integer encoding of this state.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for LifecycleState {
    type Error = ContainerError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Self::Created),
            1 => Ok(Self::Active),
            2 => Ok(Self::Inactive),
            other => Err(ContainerError::InvalidStateOrdinal(other)),
        }
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "Created"),
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
        }
    }
}

// =============================================================================
// CONTAINER RECORD
// =============================================================================

/// Literal seeded into `fixed_data` at construction, before padding.
pub const FIXED_DATA_SEED: &[u8] = b"0xabcdef123456";

/// The persistent record held by the State Container.
///
/// Created exactly once per deployed instance, with `recipient` seeded from
/// the construction argument and every other field at its documented initial
/// value. Mutated only through the methods below; never destroyed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRecord {
    /// Signed integer, initially 100.
    pub positive_number: i64,
    /// Signed integer, initially -50.
    pub negative_number: i64,
    /// Boolean flag, initially true. Flipped via [`Self::toggle_active`].
    pub is_active: bool,
    /// Account identifier, initially the zero address.
    pub wallet: Address,
    /// Account identifier, seeded from the construction argument. Updated
    /// jointly with `wallet` by [`Self::set_wallet`].
    pub recipient: Address,
    /// Fixed 32-byte blob, initially the seed literal right-padded.
    pub fixed_data: Bytes32,
    /// Variable-length byte sequence, initially empty.
    pub dynamic_data: Bytes,
    /// Lifecycle enumeration, initially [`LifecycleState::Active`].
    pub current_state: LifecycleState,
}

impl ContainerRecord {
    /// Constructs a fresh record with `recipient` seeded from the caller.
    #[must_use]
    pub fn new(recipient: Address) -> Self {
        Self {
            positive_number: 100,
            negative_number: -50,
            is_active: true,
            wallet: Address::ZERO,
            recipient,
            // The seed literal is 14 bytes; padding cannot fail.
            fixed_data: pad_fixed(FIXED_DATA_SEED)
                .unwrap_or(Bytes32::ZERO),
            dynamic_data: Bytes::new(),
            current_state: LifecycleState::Active,
        }
    }

    // -------------------------------------------------------------------------
    // Mutators (validate-then-commit)
    // -------------------------------------------------------------------------

    /// Overwrites `positive_number`. Total.
    pub fn set_positive_number(&mut self, value: i64) {
        self.positive_number = value;
    }

    /// Overwrites `negative_number`. Total.
    pub fn set_negative_number(&mut self, value: i64) {
        self.negative_number = value;
    }

    /// Flips `is_active` to its logical complement. Total.
    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
    }

    /// Sets `wallet` and `recipient` to `addr` as a single state transition.
    ///
    /// The zero address is accepted. The two fields are never assigned
    /// independently; after this call they are always equal.
    pub fn set_wallet(&mut self, addr: Address) {
        self.wallet = addr;
        self.recipient = addr;
    }

    /// Stores `data` right-padded with zero bytes to exactly 32 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::FixedDataTooLong`] when `data` exceeds
    /// 32 bytes; no field is written in that case.
    pub fn set_fixed_data(&mut self, data: &[u8]) -> Result<(), ContainerError> {
        let padded = pad_fixed(data).ok_or(ContainerError::FixedDataTooLong {
            len: data.len(),
            max: Bytes32::WIDTH,
        })?;
        self.fixed_data = padded;
        Ok(())
    }

    /// Replaces `dynamic_data` wholesale. Total; no length constraint.
    pub fn set_dynamic_data(&mut self, data: Bytes) {
        self.dynamic_data = data;
    }

    /// Sets `current_state` from an enumeration ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::InvalidStateOrdinal`] when the ordinal is
    /// outside {0, 1, 2}; the prior state is retained.
    pub fn set_state(&mut self, ordinal: u8) -> Result<(), ContainerError> {
        self.current_state = LifecycleState::try_from(ordinal)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Derived reads (no side effects)
    // -------------------------------------------------------------------------

    /// Returns the byte length of `dynamic_data`.
    #[must_use]
    pub fn dynamic_data_length(&self) -> usize {
        self.dynamic_data.len()
    }

    /// Reinterprets the raw bytes of `dynamic_data` as text.
    ///
    /// No decoding guarantees: invalid sequences are replaced and embedded
    /// padding bytes are passed through. Callers post-process the result.
    #[must_use]
    pub fn dynamic_data_as_string(&self) -> String {
        String::from_utf8_lossy(self.dynamic_data.as_slice()).into_owned()
    }

    /// Returns the aggregate snapshot of all eight fields.
    #[must_use]
    pub fn details(&self) -> ContainerDetails {
        ContainerDetails {
            positive_number: self.positive_number,
            negative_number: self.negative_number,
            is_active: self.is_active,
            wallet: self.wallet,
            recipient: self.recipient,
            fixed_data: self.fixed_data,
            dynamic_data: self.dynamic_data.clone(),
            current_state: self.current_state,
        }
    }
}

// =============================================================================
// CONTAINER DETAILS
// =============================================================================

/// Aggregate snapshot returned by [`ContainerRecord::details`].
///
/// Field order is the contract's fixed tuple order: (positive_number,
/// negative_number, is_active, wallet, recipient, fixed_data, dynamic_data,
/// current_state).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDetails {
    /// Field 0.
    pub positive_number: i64,
    /// Field 1.
    pub negative_number: i64,
    /// Field 2.
    pub is_active: bool,
    /// Field 3.
    pub wallet: Address,
    /// Field 4.
    pub recipient: Address,
    /// Field 5.
    pub fixed_data: Bytes32,
    /// Field 6.
    pub dynamic_data: Bytes,
    /// Field 7.
    pub current_state: LifecycleState,
}

// =============================================================================
// TESTS
// =============================================================================
