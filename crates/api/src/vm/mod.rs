// Path: crates/api/src/vm/mod.rs
//! Defines the core traits and types for execution contexts that can run
//! read-only contract calls.
use sysreg_types::app::Address;
use sysreg_types::error::VmError;

mod query;
mod scope;

pub use query::query_contract;
pub use scope::UnchargedScope;

/// Control over whether executed work is charged to the ambient gas budget.
///
/// Suspensions nest: every `suspend_charging` must be matched by exactly one
/// `resume_charging`, in last-in first-out order. Use [`UnchargedScope`] rather
/// than calling these directly.
pub trait ChargeControl {
    /// Stops charging gas to the enclosing budget until the matching resume.
    fn suspend_charging(&self);
    /// Undoes the most recent `suspend_charging`.
    fn resume_charging(&self);
}

/// An execution context pinned to one point in chain history that can inspect
/// deployed code and run bounded, read-only calls.
///
/// A context is owned by a single logical call chain. It is never retained by
/// the code that consumes it.
pub trait ContractCaller: ChargeControl {
    /// Returns true if contract code is deployed at `address`.
    fn is_deployed(&self, address: &Address) -> bool;

    /// Executes a read-only call into `target`.
    ///
    /// # Arguments
    /// * `caller`: The address presented to the callee as the sender.
    /// * `target`: The contract to call.
    /// * `input`: The encoded call data.
    /// * `gas_limit`: A hard ceiling on the gas the call may consume.
    ///
    /// The call must not modify state and must never consume more than
    /// `gas_limit`; exhausting it fails with [`VmError::OutOfGas`].
    fn static_call(
        &self,
        caller: Address,
        target: Address,
        input: &[u8],
        gas_limit: u64,
    ) -> Result<CallOutput, VmError>;
}

/// Contains the results of a successful contract call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallOutput {
    /// The amount of gas consumed by the call.
    pub gas_used: u64,
    /// The data returned by the call.
    pub return_data: Vec<u8>,
}
