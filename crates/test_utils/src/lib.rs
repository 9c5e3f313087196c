// Path: crates/test_utils/src/lib.rs
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

//! # System Registry Test Utilities
//!
//! Chain states for each registry bootstrap phase, contracts that fail in
//! controlled ways, and a context wrapper that records metering events.

pub mod contracts;
pub mod fixtures;
pub mod recording;

pub use contracts::{GasBurnerContract, PanickingContract, RevertingContract};
pub use fixtures::{
    configured_registry_context, direct_registry_context, genesis_context, registry_with_code,
    unconfigured_registry_context, IMPLEMENTATION_ADDRESS, TX_GAS_BUDGET,
};
pub use recording::{RecordedCall, RecordingContext};
