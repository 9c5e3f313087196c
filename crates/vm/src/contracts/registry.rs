// Path: crates/vm/src/contracts/registry.rs

//! The registry implementation: a mapping from service identifiers to the
//! addresses currently implementing them.

use super::NativeContract;
use crate::context::CallEnv;
use crate::state::WorldState;
use sysreg_abi::Function;
use sysreg_types::abi::Token;
use sysreg_types::app::{keccak256, Address, RegistryId, B256};
use sysreg_types::error::{CodecError, VmError};
use sysreg_types::registry::{GET_ADDRESS_FOR, GET_ADDRESS_FOR_ABI};

/// The storage slot of the identifier-to-address mapping.
const REGISTRY_MAPPING_SLOT: u8 = 1;

/// Answers `getAddressFor(bytes32)` from storage.
///
/// Bindings are written with [`RegistryContract::bind`], which stands in for
/// the governance transaction that would update them on a live chain. When
/// deployed behind a [`super::ProxyContract`], bindings live in the proxy's
/// storage.
#[derive(Debug, Clone)]
pub struct RegistryContract {
    get_address_for: Function,
}

impl RegistryContract {
    /// Builds the contract from the lookup function's ABI fragment.
    pub fn new() -> Result<Self, CodecError> {
        Ok(Self {
            get_address_for: Function::from_json(GET_ADDRESS_FOR_ABI, GET_ADDRESS_FOR)?,
        })
    }

    /// The storage slot holding the binding for `id`.
    pub fn binding_slot(id: &RegistryId) -> B256 {
        let mut preimage = [0u8; 64];
        let (key, slot) = preimage.split_at_mut(32);
        key.copy_from_slice(id.as_ref());
        if let Some(last) = slot.last_mut() {
            *last = REGISTRY_MAPPING_SLOT;
        }
        keccak256(preimage)
    }

    /// Binds `id` to `address` in the registry storage held by `storage_owner`.
    /// Binding the zero address removes the entry.
    pub fn bind(state: &mut WorldState, storage_owner: Address, id: RegistryId, address: Address) {
        state.set_storage(storage_owner, Self::binding_slot(&id), address.into_word());
    }

    /// Reads the binding for `id` directly from storage, without a call.
    pub fn binding(state: &WorldState, storage_owner: &Address, id: &RegistryId) -> Address {
        Address::from_word(state.storage(storage_owner, &Self::binding_slot(id)))
    }

    fn identifier(args: &[Token]) -> Option<RegistryId> {
        match args.first() {
            Some(Token::FixedBytes(bytes)) => {
                B256::try_from(bytes.as_slice()).ok().map(RegistryId)
            }
            _ => None,
        }
    }
}

impl NativeContract for RegistryContract {
    fn name(&self) -> &str {
        "Registry"
    }

    fn call(&self, env: &mut CallEnv<'_>, input: &[u8]) -> Result<Vec<u8>, VmError> {
        let id = self
            .get_address_for
            .decode_input(input)
            .ok()
            .and_then(|args| Self::identifier(&args))
            .ok_or_else(|| VmError::ExecutionReverted(Vec::new()))?;
        let word = env.sload(&Self::binding_slot(&id))?;
        Ok(Address::from_word(word).into_word().to_vec())
    }
}
