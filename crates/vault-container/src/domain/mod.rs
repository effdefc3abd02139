//! # Domain Layer
//!
//! Core business logic for the State Container:
//!
//! - `entities`: the container record, its lifecycle enumeration, and the
//!   aggregate details tuple
//! - `invariants`: runtime-checkable invariants over a record
//! - `services`: pure functions (padding, address derivation)
//!
//! This layer has no knowledge of the call interface, the ledger, or any
//! async machinery.

pub mod entities;
pub mod invariants;
pub mod services;
