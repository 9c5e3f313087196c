// Path: crates/test_utils/src/recording.rs

//! A context wrapper that records what a caller asked of it.

use std::cell::{Cell, RefCell};
use sysreg_api::vm::{CallOutput, ChargeControl, ContractCaller};
use sysreg_types::app::Address;
use sysreg_types::error::VmError;

/// One recorded static call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Sender of the call.
    pub caller: Address,
    /// Called contract.
    pub target: Address,
    /// Call data.
    pub input: Vec<u8>,
    /// Gas ceiling passed with the call.
    pub gas_limit: u64,
    /// Uncharged scopes open when the call was made.
    pub open_scopes: u32,
}

/// Wraps a context and records scope transitions and calls, forwarding
/// everything to the inner context.
#[derive(Debug)]
pub struct RecordingContext<C> {
    inner: C,
    entered: Cell<u32>,
    exited: Cell<u32>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl<C: ContractCaller> RecordingContext<C> {
    /// Starts recording calls made against `inner`.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            entered: Cell::new(0),
            exited: Cell::new(0),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// The wrapped context.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Number of uncharged scopes entered.
    pub fn entered(&self) -> u32 {
        self.entered.get()
    }

    /// Number of uncharged scopes exited.
    pub fn exited(&self) -> u32 {
        self.exited.get()
    }

    /// Scopes entered but not yet exited.
    pub fn open_scopes(&self) -> u32 {
        self.entered.get().saturating_sub(self.exited.get())
    }

    /// The calls made so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl<C: ContractCaller> ChargeControl for RecordingContext<C> {
    fn suspend_charging(&self) {
        self.entered.set(self.entered.get() + 1);
        self.inner.suspend_charging();
    }

    fn resume_charging(&self) {
        self.exited.set(self.exited.get() + 1);
        self.inner.resume_charging();
    }
}

impl<C: ContractCaller> ContractCaller for RecordingContext<C> {
    fn is_deployed(&self, address: &Address) -> bool {
        self.inner.is_deployed(address)
    }

    fn static_call(
        &self,
        caller: Address,
        target: Address,
        input: &[u8],
        gas_limit: u64,
    ) -> Result<CallOutput, VmError> {
        self.calls.borrow_mut().push(RecordedCall {
            caller,
            target,
            input: input.to_vec(),
            gas_limit,
            open_scopes: self.open_scopes(),
        });
        self.inner.static_call(caller, target, input, gas_limit)
    }
}
