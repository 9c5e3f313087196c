// Path: crates/vm/src/lib.rs
//! # System Registry VM Crate Lints
//!
//! This crate enforces a strict set of lints to ensure panic-free code.
//! Panics are disallowed in non-test code to promote robust error handling.
#![forbid(unsafe_code)]
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
//! # System Registry VM
//!
//! An in-memory execution context that runs bounded, read-only calls into
//! native contracts. It models what the registry resolver needs from a real
//! execution engine: code presence, per-call gas ceilings, an ambient gas
//! budget with uncharged scopes, and write protection for static calls.

pub mod context;
pub mod contracts;
pub mod gas;
pub mod state;

pub use context::{CallEnv, MemoryContext};
pub use contracts::{NativeContract, ProxyContract, RegistryContract};
pub use gas::GasMeter;
pub use state::WorldState;
