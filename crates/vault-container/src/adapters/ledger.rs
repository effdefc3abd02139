//! # In-Memory Ledger
//!
//! Balance table backing the `LedgerAccess` port for tests and the
//! deployment tool. A production host would replace this with its own
//! accounting.

use crate::errors::LedgerError;
use crate::ports::outbound::LedgerAccess;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use vault_types::{Address, U256};

/// In-memory native value accounting.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    /// Balances per address. Absent entries read as zero.
    balances: RwLock<HashMap<Address, U256>>,
}

impl InMemoryLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with pre-funded accounts.
    #[must_use]
    pub fn with_balances(seed: impl IntoIterator<Item = (Address, U256)>) -> Self {
        Self {
            balances: RwLock::new(seed.into_iter().collect()),
        }
    }
}

#[async_trait]
impl LedgerAccess for InMemoryLedger {
    async fn balance(&self, addr: Address) -> U256 {
        self.balances
            .read()
            .await
            .get(&addr)
            .copied()
            .unwrap_or_else(U256::zero)
    }

    async fn credit(&self, addr: Address, amount: U256) -> Result<(), LedgerError> {
        let mut balances = self.balances.write().await;
        let entry = balances.entry(addr).or_insert_with(U256::zero);
        *entry = entry
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        Ok(())
    }

    async fn transfer(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        // Single write lock: the debit and credit commit together or not
        // at all.
        let mut balances = self.balances.write().await;

        let available = balances.get(&from).copied().unwrap_or_else(U256::zero);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                required: amount,
                available,
            });
        }

        let credited = balances
            .get(&to)
            .copied()
            .unwrap_or_else(U256::zero)
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        balances.insert(from, available - amount);
        balances.insert(to, credited);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
