//! # Driving Ports (API - Inbound)
//!
//! The typed call interface of the State Container: eight mutators and the
//! derived/aggregate readers. There is no authentication layer - any caller
//! may invoke any operation.
//!
//! Mutators return `Err` only for the two documented rejection conditions;
//! everything else is total. Readers never mutate.

use crate::domain::entities::ContainerDetails;
use crate::errors::ContainerError;
use async_trait::async_trait;
use vault_types::{Address, Bytes};

/// The public operations of the State Container.
#[async_trait]
pub trait ContainerApi: Send + Sync {
    /// Overwrites `positive_number`.
    async fn set_positive_number(&self, value: i64);

    /// Overwrites `negative_number`.
    async fn set_negative_number(&self, value: i64);

    /// Flips `is_active` to its logical complement.
    async fn toggle_active(&self);

    /// Sets `wallet` and `recipient` to `addr` as one state transition.
    async fn set_wallet(&self, addr: Address);

    /// Stores `data` right-padded to 32 bytes.
    ///
    /// # Errors
    ///
    /// [`ContainerError::FixedDataTooLong`] when `data` exceeds 32 bytes;
    /// the record is left unchanged.
    async fn set_fixed_data(&self, data: Bytes) -> Result<(), ContainerError>;

    /// Replaces `dynamic_data` wholesale.
    async fn set_dynamic_data(&self, data: Bytes);

    /// Sets `current_state` from an enumeration ordinal.
    ///
    /// # Errors
    ///
    /// [`ContainerError::InvalidStateOrdinal`] when `ordinal` is outside
    /// {0, 1, 2}; the prior state is retained.
    async fn set_state(&self, ordinal: u8) -> Result<(), ContainerError>;

    /// Returns the byte length of `dynamic_data`.
    async fn dynamic_data_length(&self) -> usize;

    /// Reinterprets `dynamic_data` as text, with no decoding guarantees.
    async fn dynamic_data_as_string(&self) -> String;

    /// Returns the aggregate snapshot of all eight fields.
    async fn details(&self) -> ContainerDetails;
}
