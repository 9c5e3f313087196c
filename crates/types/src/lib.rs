// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # System Registry Types
//!
//! This crate is the foundational library for the system registry workspace,
//! containing the core data structures, error types, and configuration objects.
//!
//! ## Architectural Role
//!
//! As the base crate, `sysreg-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. This keeps canonical
//! definitions for shared types like `Address`, `RegistryId` and the error
//! enums in one place and prevents circular dependencies.

/// ABI value tokens and parameter types shared by the codec and its callers.
pub mod abi;
/// Core value types like `Address`, `RegistryId` and `B256`.
pub mod app;
/// Shared configuration structures (e.g., `RegistryConfig`).
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Well-known registry service names and protocol constants.
pub mod registry;
