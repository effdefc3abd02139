//! # Vault Container - Typed State Container
//!
//! A minimal typed-state container exercising every primitive data
//! representation of the hosting execution environment: signed integers,
//! booleans, addresses, fixed-size byte arrays, variable-length byte
//! arrays, and enumerations.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Fixed data is exactly 32 bytes in storage | `domain/entities.rs` - `set_fixed_data()` |
//! | INVARIANT-2 | Lifecycle state is a defined enumeration member | `domain/entities.rs` - `set_state()` |
//! | INVARIANT-3 | `set_wallet` assigns wallet and recipient together | `domain/entities.rs` - `set_wallet()` |
//! | INVARIANT-4 | Reads have no side effects | `&self` receivers throughout |
//!
//! ## Execution Model
//!
//! Each mutator call is an atomic, serialized unit of work: validation runs
//! to completion before any field is written, so a rejected call leaves the
//! record exactly as it was. The two rejection conditions are oversized
//! fixed-data input and an out-of-range state ordinal; every other
//! operation is total.
//!
//! ## Boundary
//!
//! - Construction: one `recipient` parameter, all other fields at their
//!   documented initial values
//! - Calls: seven mutators plus derived and aggregate readers, invocable by
//!   any caller (no authentication layer)
//! - Value transfer: `wallet` and `recipient` accept inbound native value
//!   through the [`ports::outbound::LedgerAccess`] collaborator; the
//!   container defines no transfer logic of its own
//!
//! ## Usage Example
//!
//! ```ignore
//! use vault_container::prelude::*;
//!
//! let service = create_test_service(recipient);
//! let receipt = service.handle_call(correlation_id, Call::SetState(2)).await;
//! assert!(receipt.success);
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod calls;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{
        ContainerDetails, ContainerRecord, LifecycleState, FIXED_DATA_SEED,
    };

    // Domain services
    pub use crate::domain::services::{compute_container_address, pad_fixed};

    // Invariants
    pub use crate::domain::invariants::{
        check_all_invariants, InvariantCheckResult, InvariantViolation,
    };

    // Calls
    pub use crate::calls::{Call, CallReceipt};

    // Ports
    pub use crate::ports::inbound::ContainerApi;
    pub use crate::ports::outbound::LedgerAccess;

    // Errors
    pub use crate::errors::{ContainerError, LedgerError};

    // Adapters
    pub use crate::adapters::InMemoryLedger;

    // Service
    pub use crate::service::{
        create_test_service, ContainerService, ServiceConfig, ServiceStats,
    };

    // Primitives
    pub use vault_types::{Address, Bytes, Bytes32, U256};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
