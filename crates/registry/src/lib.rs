// Path: crates/registry/src/lib.rs
//! # System Registry Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]
//! # System Registry Resolver
//!
//! Resolves logical service identifiers (32-byte hashes naming protocol
//! services such as `Validators`) to the address currently implementing the
//! service, by making a bounded, uncharged, read-only call into the registry
//! contract at a fixed address.
//!
//! The resolver distinguishes three bootstrap phases of a chain:
//!
//! | Phase | Outcome |
//! |---|---|
//! | No code at the registry address | `RegistryNotDeployed` (`NoCode`) |
//! | Registry proxy without implementation | `RegistryNotDeployed` (`NoImplementation`) |
//! | Registry configured | the bound address, or `ServiceNotRegistered` |
//!
//! Nothing is cached: every lookup is evaluated against the context it is given.

pub mod guard;
pub mod resolver;

pub use guard::is_deployed;
pub use resolver::RegistryResolver;
