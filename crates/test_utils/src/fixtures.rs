// Path: crates/test_utils/src/fixtures.rs

//! Execution contexts for each phase of the registry's bootstrap.

use anyhow::Result;
use std::sync::Arc;
use sysreg_types::app::{address, Address, RegistryId};
use sysreg_types::registry::REGISTRY_CONTRACT_ADDRESS;
use sysreg_vm::{MemoryContext, NativeContract, ProxyContract, RegistryContract, WorldState};

/// Where the registry implementation lives behind the proxy.
pub const IMPLEMENTATION_ADDRESS: Address = address!("000000000000000000000000000000000000ce11");

/// Gas budget of the ambient transaction in fixture contexts.
pub const TX_GAS_BUDGET: u64 = 1_000_000;

/// A context at genesis: nothing is deployed at the registry address.
pub fn genesis_context() -> MemoryContext {
    MemoryContext::new(WorldState::new(), 0, TX_GAS_BUDGET)
}

/// A context where the registry proxy exists but has no implementation.
pub fn unconfigured_registry_context() -> MemoryContext {
    let mut state = WorldState::new();
    state.deploy(REGISTRY_CONTRACT_ADDRESS, Arc::new(ProxyContract));
    MemoryContext::new(state, 1, TX_GAS_BUDGET)
}

/// A context with a fully configured proxied registry holding `bindings`.
pub fn configured_registry_context(
    bindings: &[(RegistryId, Address)],
    block_height: u64,
) -> Result<MemoryContext> {
    let mut state = WorldState::new();
    state.deploy(REGISTRY_CONTRACT_ADDRESS, Arc::new(ProxyContract));
    state.deploy(IMPLEMENTATION_ADDRESS, Arc::new(RegistryContract::new()?));
    ProxyContract::set_implementation(
        &mut state,
        REGISTRY_CONTRACT_ADDRESS,
        IMPLEMENTATION_ADDRESS,
    );
    for (id, address) in bindings {
        RegistryContract::bind(&mut state, REGISTRY_CONTRACT_ADDRESS, *id, *address);
    }
    tracing::debug!(
        target: "test_utils",
        bindings = bindings.len(),
        height = block_height,
        "Built configured registry context"
    );
    Ok(MemoryContext::new(state, block_height, TX_GAS_BUDGET))
}

/// A context with the registry implementation deployed directly, without a proxy.
pub fn direct_registry_context(bindings: &[(RegistryId, Address)]) -> Result<MemoryContext> {
    let mut state = WorldState::new();
    state.deploy(REGISTRY_CONTRACT_ADDRESS, Arc::new(RegistryContract::new()?));
    for (id, address) in bindings {
        RegistryContract::bind(&mut state, REGISTRY_CONTRACT_ADDRESS, *id, *address);
    }
    Ok(MemoryContext::new(state, 1, TX_GAS_BUDGET))
}

/// A context where arbitrary `code` answers at the registry address.
pub fn registry_with_code(code: Arc<dyn NativeContract>) -> MemoryContext {
    let mut state = WorldState::new();
    state.deploy(REGISTRY_CONTRACT_ADDRESS, code);
    MemoryContext::new(state, 1, TX_GAS_BUDGET)
}
