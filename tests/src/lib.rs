//! # TypeVault Test Suite
//!
//! Unified test crate for the workspace.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── container_flows.rs   # Every mutator, both rejections, getDetails
//!     └── value_transfer.rs    # Native value receivability
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p vault-tests
//!
//! # By category
//! cargo test -p vault-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
