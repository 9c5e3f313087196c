// Path: crates/vm/src/contracts/proxy.rs

//! An upgradeable proxy that forwards every call to its implementation.

use super::NativeContract;
use crate::context::CallEnv;
use crate::state::WorldState;
use sysreg_types::app::{keccak256, Address, B256};
use sysreg_types::error::VmError;

/// A proxy whose externally visible address stays fixed while the
/// implementation behind it can be replaced.
///
/// The implementation address lives in the proxy's own storage. Until one is
/// set, every call succeeds and returns no data.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProxyContract;

impl ProxyContract {
    /// The storage slot holding the implementation address.
    pub fn implementation_slot() -> B256 {
        keccak256(b"eip1967.proxy.implementation")
    }

    /// Sets the implementation of the proxy at `proxy`. A zero address unsets it.
    pub fn set_implementation(state: &mut WorldState, proxy: Address, implementation: Address) {
        state.set_storage(proxy, Self::implementation_slot(), implementation.into_word());
    }

    /// Reads the implementation address of the proxy at `proxy`.
    pub fn implementation(state: &WorldState, proxy: &Address) -> Address {
        Address::from_word(state.storage(proxy, &Self::implementation_slot()))
    }
}

impl NativeContract for ProxyContract {
    fn name(&self) -> &str {
        "Proxy"
    }

    fn call(&self, env: &mut CallEnv<'_>, input: &[u8]) -> Result<Vec<u8>, VmError> {
        let implementation = Address::from_word(env.sload(&Self::implementation_slot())?);
        if implementation.is_zero() {
            return Ok(Vec::new());
        }
        env.delegate(implementation, input)
    }
}
