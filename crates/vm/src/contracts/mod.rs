// Path: crates/vm/src/contracts/mod.rs
//! Native contracts: contract code implemented in Rust and executed by the
//! in-memory context.

use crate::context::CallEnv;
use std::fmt::Debug;
use sysreg_types::error::VmError;

mod proxy;
mod registry;

pub use proxy::ProxyContract;
pub use registry::RegistryContract;

/// Contract code that can be deployed into a [`crate::WorldState`].
pub trait NativeContract: Send + Sync + Debug {
    /// A short human-readable name, used in traces.
    fn name(&self) -> &str;

    /// Handles one call. `input` is the raw call data; the returned bytes are
    /// the call's return data. Gas must be consumed through `env`.
    fn call(&self, env: &mut CallEnv<'_>, input: &[u8]) -> Result<Vec<u8>, VmError>;
}
