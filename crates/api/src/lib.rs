// Path: crates/api/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
//! # System Registry API
//!
//! Core traits and interfaces for the system registry workspace. This crate
//! defines the stable contract between the resolver and its collaborators:
//! the execution context that runs read-only calls, and the ABI codec that
//! shapes their input and output.

pub mod abi;
pub mod vm;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::abi::AbiFunction;
    pub use crate::vm::{query_contract, CallOutput, ChargeControl, ContractCaller, UnchargedScope};
}
