// Path: crates/vm/src/state.rs

//! Account, code and storage state as of one point in chain history.

use crate::contracts::NativeContract;
use std::collections::BTreeMap;
use std::sync::Arc;
use sysreg_types::app::{Address, B256};

/// A single account: optional contract code plus its storage.
#[derive(Clone, Default, Debug)]
pub struct Account {
    /// The deployed contract, if any.
    pub code: Option<Arc<dyn NativeContract>>,
    /// Storage words. Absent keys read as zero.
    pub storage: BTreeMap<B256, B256>,
}

/// A snapshot of all accounts.
///
/// Cloning is cheap enough for tests and tooling: code is shared, storage is
/// copied. Two snapshots are fully independent afterwards.
#[derive(Clone, Default, Debug)]
pub struct WorldState {
    accounts: BTreeMap<Address, Account>,
}

impl WorldState {
    /// Creates an empty state, as at genesis before any deployment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploys `code` at `address`, replacing any code already there.
    pub fn deploy(&mut self, address: Address, code: Arc<dyn NativeContract>) {
        self.accounts.entry(address).or_default().code = Some(code);
    }

    /// Removes the code at `address`, keeping its storage.
    pub fn destroy_code(&mut self, address: &Address) {
        if let Some(account) = self.accounts.get_mut(address) {
            account.code = None;
        }
    }

    /// Returns the code deployed at `address`.
    pub fn code(&self, address: &Address) -> Option<Arc<dyn NativeContract>> {
        self.accounts.get(address).and_then(|a| a.code.clone())
    }

    /// Returns true if code is deployed at `address`.
    pub fn has_code(&self, address: &Address) -> bool {
        self.accounts
            .get(address)
            .is_some_and(|a| a.code.is_some())
    }

    /// Reads a storage word. Missing entries read as zero.
    pub fn storage(&self, address: &Address, key: &B256) -> B256 {
        self.accounts
            .get(address)
            .and_then(|a| a.storage.get(key))
            .copied()
            .unwrap_or_default()
    }

    /// Writes a storage word. Writing zero clears the entry.
    pub fn set_storage(&mut self, address: Address, key: B256, value: B256) {
        let storage = &mut self.accounts.entry(address).or_default().storage;
        if value.is_zero() {
            storage.remove(&key);
        } else {
            storage.insert(key, value);
        }
    }
}
