// Path: crates/types/src/app/mod.rs
//! Core value types shared by every crate: account addresses, registry
//! identifiers and 32-byte storage words.

pub use alloy_primitives::{address, b256, keccak256, Address, B256};

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque 32-byte identifier naming a logical protocol service in the registry.
///
/// The same identifier always denotes the same logical service for the whole
/// history of a chain, even though the address it is bound to may change.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryId(pub B256);

impl RegistryId {
    /// Derives the canonical identifier for a service name: `keccak256(name)`.
    pub fn from_name(name: &str) -> Self {
        Self(keccak256(name.as_bytes()))
    }
}

impl AsRef<[u8]> for RegistryId {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl From<B256> for RegistryId {
    fn from(word: B256) -> Self {
        Self(word)
    }
}

impl fmt::Display for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegistryId({})", self.0)
    }
}
