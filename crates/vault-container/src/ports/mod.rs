//! # Ports
//!
//! Hexagonal boundaries of the container:
//!
//! - `inbound`: the typed API callers drive the container through
//! - `outbound`: the ledger collaborator the hosting environment provides

pub mod inbound;
pub mod outbound;
