// Path: crates/vm/src/context.rs

//! The in-memory execution context and the environment native contracts run in.

use crate::gas::{
    intrinsic_call_gas, GasMeter, CALL_BASE_GAS, MAX_CALL_DEPTH, SLOAD_GAS, SSTORE_GAS,
};
use crate::state::WorldState;
use sysreg_api::vm::{CallOutput, ChargeControl, ContractCaller};
use sysreg_types::app::{Address, B256};
use sysreg_types::error::VmError;

/// The environment handed to a native contract for the duration of one call.
///
/// Every call this crate runs is static: reads are metered against the call's
/// own gas limit, and writes are refused.
pub struct CallEnv<'a> {
    state: &'a WorldState,
    address: Address,
    caller: Address,
    gas_limit: u64,
    gas_used: u64,
    depth: usize,
}

impl<'a> CallEnv<'a> {
    fn new(
        state: &'a WorldState,
        address: Address,
        caller: Address,
        gas_limit: u64,
        depth: usize,
    ) -> Self {
        Self {
            state,
            address,
            caller,
            gas_limit,
            gas_used: 0,
            depth,
        }
    }

    /// The account whose storage this call reads (the proxy, under delegation).
    pub fn address(&self) -> Address {
        self.address
    }

    /// The sender of the call.
    pub fn caller(&self) -> Address {
        self.caller
    }

    /// Gas consumed so far by this call.
    pub fn gas_used(&self) -> u64 {
        self.gas_used
    }

    /// Gas still available to this call.
    pub fn gas_remaining(&self) -> u64 {
        self.gas_limit.saturating_sub(self.gas_used)
    }

    /// Consumes `gas`. Running past the limit consumes everything that is
    /// left and fails with [`VmError::OutOfGas`].
    pub fn charge(&mut self, gas: u64) -> Result<(), VmError> {
        let next = self.gas_used.saturating_add(gas);
        if next > self.gas_limit {
            self.gas_used = self.gas_limit;
            return Err(VmError::OutOfGas {
                limit: self.gas_limit,
            });
        }
        self.gas_used = next;
        Ok(())
    }

    /// Reads a word from the current account's storage.
    pub fn sload(&mut self, key: &B256) -> Result<B256, VmError> {
        self.charge(SLOAD_GAS)?;
        Ok(self.state.storage(&self.address, key))
    }

    /// Attempts a storage write, which a static call never permits.
    pub fn sstore(&mut self, _key: &B256, _value: &B256) -> Result<(), VmError> {
        self.charge(SSTORE_GAS)?;
        Err(VmError::WriteProtection)
    }

    /// Runs `implementation`'s code against the current account's storage,
    /// sharing this call's sender and gas. Delegating to an address without
    /// code succeeds with no return data.
    pub fn delegate(
        &mut self,
        implementation: Address,
        input: &[u8],
    ) -> Result<Vec<u8>, VmError> {
        if self.depth + 1 > MAX_CALL_DEPTH {
            return Err(VmError::CallDepthExceeded(MAX_CALL_DEPTH));
        }
        self.charge(CALL_BASE_GAS)?;
        let Some(code) = self.state.code(&implementation) else {
            return Ok(Vec::new());
        };
        let mut child = CallEnv::new(
            self.state,
            self.address,
            self.caller,
            self.gas_remaining(),
            self.depth + 1,
        );
        let result = code.call(&mut child, input);
        self.gas_used = self.gas_used.saturating_add(child.gas_used);
        result
    }
}

/// An execution context over an in-memory [`WorldState`] snapshot.
///
/// The context owns its gas meter through interior mutability, so it can be
/// moved between threads but not shared: one logical call chain at a time.
#[derive(Debug)]
pub struct MemoryContext {
    state: WorldState,
    block_height: u64,
    meter: GasMeter,
}

impl MemoryContext {
    /// Creates a context reading `state` at `block_height`, billing work to a
    /// transaction budget of `gas_budget`.
    pub fn new(state: WorldState, block_height: u64, gas_budget: u64) -> Self {
        Self {
            state,
            block_height,
            meter: GasMeter::new(gas_budget),
        }
    }

    /// The state this context reads.
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// The block height this context is pinned to.
    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    /// The ambient gas meter.
    pub fn meter(&self) -> &GasMeter {
        &self.meter
    }
}

impl ChargeControl for MemoryContext {
    fn suspend_charging(&self) {
        self.meter.suspend();
    }

    fn resume_charging(&self) {
        self.meter.resume();
    }
}

impl ContractCaller for MemoryContext {
    fn is_deployed(&self, address: &Address) -> bool {
        self.state.has_code(address)
    }

    fn static_call(
        &self,
        caller: Address,
        target: Address,
        input: &[u8],
        gas_limit: u64,
    ) -> Result<CallOutput, VmError> {
        let Some(code) = self.state.code(&target) else {
            tracing::trace!(target: "vm", callee = %target, "Static call to account without code");
            return Ok(CallOutput::default());
        };
        let mut env = CallEnv::new(&self.state, target, caller, gas_limit, 0);
        let result = env
            .charge(intrinsic_call_gas(input.len()))
            .and_then(|()| code.call(&mut env, input));
        let gas_used = env.gas_used();
        tracing::trace!(
            target: "vm",
            callee = %target,
            contract = code.name(),
            height = self.block_height,
            gas_used,
            gas_limit,
            ok = result.is_ok(),
            "Static call finished"
        );
        let billed = self.meter.charge(gas_used);
        let return_data = result?;
        billed?;
        Ok(CallOutput {
            gas_used,
            return_data,
        })
    }
}
