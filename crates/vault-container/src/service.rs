//! # Container Service
//!
//! The transactional surface of the State Container. Wraps the domain
//! record behind a single write lock so that mutator calls are processed as
//! atomic, serialized units of work: no two mutators interleave, and a call
//! commits its entire effect or none of it.
//!
//! Readers take the read lock, never mutate, and see the most recently
//! committed state.

use crate::adapters::InMemoryLedger;
use crate::calls::{Call, CallReceipt};
use crate::domain::entities::{ContainerDetails, ContainerRecord};
use crate::domain::invariants::check_all_invariants;
use crate::domain::services::compute_container_address;
use crate::errors::ContainerError;
use crate::ports::inbound::ContainerApi;
use crate::ports::outbound::LedgerAccess;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;
use vault_types::{Address, Bytes};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Container service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Emit a debug event for every handled call.
    pub trace_calls: bool,
    /// Re-check the domain invariants after every committed call.
    pub check_invariants: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            trace_calls: false,
            check_invariants: cfg!(debug_assertions),
        }
    }
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Statistics for the container service.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Total calls handled.
    pub calls_handled: u64,
    /// Calls that committed.
    pub calls_accepted: u64,
    /// Calls rejected at validation time.
    pub calls_rejected: u64,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The State Container service.
///
/// Owns one [`ContainerRecord`] for the lifetime of the deployed instance
/// and exposes:
///
/// 1. [`Self::handle_call`] - the environment-facing call interface
/// 2. [`ContainerApi`] - the typed mutators and readers
/// 3. The ledger collaborator for native value accounting
pub struct ContainerService<L: LedgerAccess> {
    /// Service configuration.
    config: ServiceConfig,
    /// Address this instance was deployed at.
    address: Address,
    /// Native value accounting (hosting environment collaborator).
    ledger: Arc<L>,
    /// The persistent record. One writer at a time.
    record: Arc<RwLock<ContainerRecord>>,
    /// Service statistics.
    stats: Arc<RwLock<ServiceStats>>,
}

impl<L: LedgerAccess> ContainerService<L> {
    /// Deploys a new container instance.
    ///
    /// Initializes the record with `recipient` seeded from the caller and
    /// derives the instance address from `(deployer, nonce)`.
    pub fn deploy(
        deployer: Address,
        nonce: u64,
        recipient: Address,
        ledger: L,
        config: ServiceConfig,
    ) -> Self {
        let address = compute_container_address(deployer, nonce);
        info!(
            container = %address,
            recipient = %recipient,
            "Deploying state container"
        );

        Self {
            config,
            address,
            ledger: Arc::new(ledger),
            record: Arc::new(RwLock::new(ContainerRecord::new(recipient))),
            stats: Arc::new(RwLock::new(ServiceStats::default())),
        }
    }

    /// Address this instance was deployed at.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// The ledger collaborator.
    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Get current service statistics.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    /// Handle one call from the hosting environment.
    ///
    /// The write lock is held for the full validate-then-commit span, so
    /// the call is atomic with respect to every other mutator and reader.
    /// A rejected call produces an unsuccessful receipt and leaves the
    /// record untouched.
    #[instrument(skip(self, call), fields(correlation_id = %correlation_id, operation = call.name()))]
    pub async fn handle_call(&self, correlation_id: Uuid, call: Call) -> CallReceipt {
        if self.config.trace_calls {
            debug!(call = ?call, "Handling container call");
        }

        let result = {
            let mut record = self.record.write().await;
            Self::apply(&mut record, &call)
        };

        let receipt = match result {
            Ok(()) => {
                info!(operation = call.name(), "Call committed");
                if self.config.check_invariants {
                    let record = self.record.read().await;
                    let check = check_all_invariants(&record);
                    if !check.is_valid() {
                        // Unreachable if the mutators are correct.
                        error!(check = ?check, "Invariant violation after commit");
                    }
                }
                CallReceipt::accepted(correlation_id, &call)
            }
            Err(err) => {
                warn!(operation = call.name(), error = %err, "Call rejected");
                CallReceipt::rejected(correlation_id, &call, &err)
            }
        };

        let mut stats = self.stats.write().await;
        stats.calls_handled += 1;
        if receipt.success {
            stats.calls_accepted += 1;
        } else {
            stats.calls_rejected += 1;
        }

        receipt
    }

    /// Applies one call to the record under the caller's write lock.
    ///
    /// Validation happens inside the domain mutators, before any field
    /// write.
    fn apply(record: &mut ContainerRecord, call: &Call) -> Result<(), ContainerError> {
        match call {
            Call::SetPositiveNumber(value) => {
                record.set_positive_number(*value);
                Ok(())
            }
            Call::SetNegativeNumber(value) => {
                record.set_negative_number(*value);
                Ok(())
            }
            Call::ToggleActive => {
                record.toggle_active();
                Ok(())
            }
            Call::SetWallet(addr) => {
                record.set_wallet(*addr);
                Ok(())
            }
            Call::SetFixedData(data) => record.set_fixed_data(data.as_slice()),
            Call::SetDynamicData(data) => {
                record.set_dynamic_data(data.clone());
                Ok(())
            }
            Call::SetState(ordinal) => record.set_state(*ordinal),
        }
    }
}

// =============================================================================
// CONTAINER API
// =============================================================================

#[async_trait]
impl<L: LedgerAccess> ContainerApi for ContainerService<L> {
    async fn set_positive_number(&self, value: i64) {
        self.record.write().await.set_positive_number(value);
    }

    async fn set_negative_number(&self, value: i64) {
        self.record.write().await.set_negative_number(value);
    }

    async fn toggle_active(&self) {
        self.record.write().await.toggle_active();
    }

    async fn set_wallet(&self, addr: Address) {
        self.record.write().await.set_wallet(addr);
    }

    async fn set_fixed_data(&self, data: Bytes) -> Result<(), ContainerError> {
        self.record.write().await.set_fixed_data(data.as_slice())
    }

    async fn set_dynamic_data(&self, data: Bytes) {
        self.record.write().await.set_dynamic_data(data);
    }

    async fn set_state(&self, ordinal: u8) -> Result<(), ContainerError> {
        self.record.write().await.set_state(ordinal)
    }

    async fn dynamic_data_length(&self) -> usize {
        self.record.read().await.dynamic_data_length()
    }

    async fn dynamic_data_as_string(&self) -> String {
        self.record.read().await.dynamic_data_as_string()
    }

    async fn details(&self) -> ContainerDetails {
        self.record.read().await.details()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

/// Creates a service over an in-memory ledger for tests and tools.
#[must_use]
pub fn create_test_service(recipient: Address) -> ContainerService<InMemoryLedger> {
    ContainerService::deploy(
        Address::new([0x11; 20]),
        0,
        recipient,
        InMemoryLedger::new(),
        ServiceConfig {
            trace_calls: true,
            check_invariants: true,
        },
    )
}

// =============================================================================
// TESTS
// =============================================================================
