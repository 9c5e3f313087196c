// Path: crates/vm/src/gas.rs

//! Gas schedule and the ambient gas meter of an execution context.

use std::cell::Cell;
use sysreg_types::error::VmError;

/// Flat cost of entering any contract call.
pub const CALL_BASE_GAS: u64 = 700;
/// Cost of one storage read.
pub const SLOAD_GAS: u64 = 800;
/// Cost of one storage write.
pub const SSTORE_GAS: u64 = 20_000;
/// Cost per (rounded up) 32-byte word of call data.
pub const INPUT_WORD_GAS: u64 = 3;
/// Maximum nesting depth of calls.
pub const MAX_CALL_DEPTH: usize = 1024;

/// Returns the intrinsic cost of a call carrying `input_len` bytes of call data.
pub fn intrinsic_call_gas(input_len: usize) -> u64 {
    let words = input_len.div_ceil(32) as u64;
    CALL_BASE_GAS.saturating_add(words.saturating_mul(INPUT_WORD_GAS))
}

/// Tracks the gas charged to the enclosing transaction budget.
///
/// Charging can be suspended for protocol-internal work. Suspensions nest and
/// are counted, so charging resumes only once every suspension is released.
#[derive(Debug)]
pub struct GasMeter {
    budget: u64,
    charged: Cell<u64>,
    suspended: Cell<u32>,
}

impl GasMeter {
    /// Creates a meter for a transaction with `budget` gas.
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            charged: Cell::new(0),
            suspended: Cell::new(0),
        }
    }

    /// Charges `gas` to the budget, unless charging is suspended.
    ///
    /// Exceeding the budget fails with [`VmError::OutOfGas`] and leaves the
    /// charged amount unchanged.
    pub fn charge(&self, gas: u64) -> Result<(), VmError> {
        if self.is_suspended() {
            tracing::trace!(target: "vm", gas, "Charging suspended, gas not billed");
            return Ok(());
        }
        let next = self.charged.get().saturating_add(gas);
        if next > self.budget {
            return Err(VmError::OutOfGas { limit: self.budget });
        }
        self.charged.set(next);
        Ok(())
    }

    /// Opens one level of suspension.
    pub fn suspend(&self) {
        self.suspended.set(self.suspended.get().saturating_add(1));
    }

    /// Closes the innermost suspension.
    pub fn resume(&self) {
        match self.suspended.get() {
            0 => tracing::warn!(target: "vm", "Gas charging resumed without a matching suspension"),
            depth => self.suspended.set(depth - 1),
        }
    }

    /// Returns true while at least one suspension is open.
    pub fn is_suspended(&self) -> bool {
        self.suspended.get() > 0
    }

    /// The number of open suspensions.
    pub fn suspension_depth(&self) -> u32 {
        self.suspended.get()
    }

    /// Gas charged so far.
    pub fn charged(&self) -> u64 {
        self.charged.get()
    }

    /// Gas left in the budget.
    pub fn remaining(&self) -> u64 {
        self.budget.saturating_sub(self.charged.get())
    }

    /// The total budget.
    pub fn budget(&self) -> u64 {
        self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charges_until_budget_is_exhausted() {
        let meter = GasMeter::new(1_000);
        assert_eq!(meter.budget(), 1_000);
        meter.charge(600).unwrap();
        assert_eq!(meter.remaining(), 400);
        assert_eq!(
            meter.charge(401),
            Err(VmError::OutOfGas { limit: 1_000 })
        );
        assert_eq!(meter.charged(), 600);
    }

    #[test]
    fn suspended_work_is_free() {
        let meter = GasMeter::new(10);
        meter.suspend();
        meter.suspend();
        meter.charge(1_000_000).unwrap();
        meter.resume();
        assert!(meter.is_suspended());
        meter.charge(1_000_000).unwrap();
        meter.resume();
        assert!(!meter.is_suspended());
        assert_eq!(meter.charged(), 0);
        assert!(meter.charge(11).is_err());
    }

    #[test]
    fn unbalanced_resume_is_harmless() {
        let meter = GasMeter::new(10);
        meter.resume();
        assert_eq!(meter.suspension_depth(), 0);
    }

    #[test]
    fn intrinsic_cost_rounds_words_up() {
        assert_eq!(intrinsic_call_gas(0), CALL_BASE_GAS);
        assert_eq!(intrinsic_call_gas(36), CALL_BASE_GAS + 2 * INPUT_WORD_GAS);
    }
}
