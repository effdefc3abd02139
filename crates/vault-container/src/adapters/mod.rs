//! # Adapters
//!
//! Concrete implementations of the outbound ports.

pub mod ledger;

pub use ledger::InMemoryLedger;
