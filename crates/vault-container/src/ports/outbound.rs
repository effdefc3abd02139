//! # Driven Ports (SPI - Outbound)
//!
//! The ledger collaborator the hosting environment provides. The container
//! itself never moves native value; it only holds identifiers that must be
//! able to receive transfers. Balance accounting lives entirely behind this
//! port.

use crate::errors::LedgerError;
use async_trait::async_trait;
use vault_types::{Address, U256};

/// Native value accounting of the hosting environment.
///
/// Every address is receivable: `credit` and `transfer` accept any target,
/// including the zero address and addresses that have never been seen.
#[async_trait]
pub trait LedgerAccess: Send + Sync {
    /// Returns the balance of `addr` (zero for unseen accounts).
    async fn balance(&self, addr: Address) -> U256;

    /// Mints `amount` into `addr`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::BalanceOverflow`] if the credit would overflow.
    async fn credit(&self, addr: Address, amount: U256) -> Result<(), LedgerError>;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] when `from` cannot cover the
    /// amount; [`LedgerError::BalanceOverflow`] if the credit side would
    /// overflow. Either way, no balance changes.
    async fn transfer(&self, from: Address, to: Address, amount: U256)
        -> Result<(), LedgerError>;

    /// Convenience check used by callers before submitting a transfer.
    async fn has_funds(&self, addr: Address, amount: U256) -> bool {
        self.balance(addr).await >= amount
    }
}
