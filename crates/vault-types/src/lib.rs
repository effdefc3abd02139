//! # Vault Types - Primitive Representations
//!
//! The leaf crate of the TypeVault workspace. Provides the semantic types the
//! State Container stores and the hosting environment accounts with:
//!
//! | Type | Representation | Used for |
//! |------|----------------|----------|
//! | [`Address`] | 20 bytes | Account identifiers (`wallet`, `recipient`) |
//! | [`Bytes32`] | fixed 32 bytes | Fixed-size blobs (`fixed_data`) |
//! | [`Bytes`] | variable length | Dynamic data, call payloads |
//! | [`U256`] | 256-bit unsigned | Native balances |
//!
//! All types are value objects: defined by their content, cheap to clone,
//! hex-printable, and serde-serializable. This crate has no I/O and no async
//! code.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod address;
pub mod bytes;
pub mod error;

pub use address::Address;
pub use bytes::{Bytes, Bytes32};
pub use error::HexError;

// Re-export U256 from primitive-types for balance arithmetic.
pub use primitive_types::U256;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
