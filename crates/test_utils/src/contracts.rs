// Path: crates/test_utils/src/contracts.rs

//! Contracts that fail in controlled ways.

use sysreg_types::error::VmError;
use sysreg_vm::{CallEnv, NativeContract};

/// Reverts every call with a fixed reason.
#[derive(Debug, Clone)]
pub struct RevertingContract {
    /// Revert data returned to the caller.
    pub reason: Vec<u8>,
}

impl RevertingContract {
    /// Reverts with `reason` as the revert data.
    pub fn new(reason: impl Into<Vec<u8>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl NativeContract for RevertingContract {
    fn name(&self) -> &str {
        "Reverting"
    }

    fn call(&self, _env: &mut CallEnv<'_>, _input: &[u8]) -> Result<Vec<u8>, VmError> {
        Err(VmError::ExecutionReverted(self.reason.clone()))
    }
}

/// Burns gas in fixed steps until the call runs out.
#[derive(Debug, Clone, Copy)]
pub struct GasBurnerContract {
    /// Gas consumed per step.
    pub step: u64,
}

impl Default for GasBurnerContract {
    fn default() -> Self {
        Self { step: 1_000 }
    }
}

impl NativeContract for GasBurnerContract {
    fn name(&self) -> &str {
        "GasBurner"
    }

    fn call(&self, env: &mut CallEnv<'_>, _input: &[u8]) -> Result<Vec<u8>, VmError> {
        loop {
            env.charge(self.step.max(1))?;
        }
    }
}

/// Panics inside the execution engine, as a faulty host would.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanickingContract;

impl NativeContract for PanickingContract {
    fn name(&self) -> &str {
        "Panicking"
    }

    #[allow(clippy::panic)]
    fn call(&self, _env: &mut CallEnv<'_>, _input: &[u8]) -> Result<Vec<u8>, VmError> {
        panic!("host fault while executing contract code")
    }
}
