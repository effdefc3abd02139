//! # Integration Tests
//!
//! End-to-end flows against a deployed container service.

pub mod container_flows;
pub mod value_transfer;
