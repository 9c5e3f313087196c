// Path: crates/types/src/error/mod.rs
//! Core error types for the system registry workspace.

use crate::abi::ParamType;
use crate::app::RegistryId;
use thiserror::Error;

/// Errors raised by the execution context while running a contract call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    /// The callee explicitly reverted. Carries the raw revert data, if any.
    #[error("execution reverted")]
    ExecutionReverted(Vec<u8>),
    /// The call tried to consume more gas than its limit allowed.
    #[error("out of gas (limit {limit})")]
    OutOfGas {
        /// The gas limit that was exceeded.
        limit: u64,
    },
    /// A state write was attempted inside a read-only call.
    #[error("write protection: state modification in a static call")]
    WriteProtection,
    /// The nested call depth limit was reached.
    #[error("max call depth exceeded ({0})")]
    CallDepthExceeded(usize),
    /// The execution context could not read the requested state.
    #[error("state access error: {0}")]
    StateAccess(String),
}

/// Errors related to encoding call data or decoding return data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The call returned no data while outputs were expected. This is what an
    /// unconfigured proxy (no implementation bound) produces.
    #[error("abi: attempting to unmarshal an empty result while outputs are expected")]
    EmptyResult,
    /// The return data is shorter than the declared outputs require.
    #[error("abi: invalid data length, expected at least {expected} bytes, got {got}")]
    InvalidLength {
        /// The minimum number of bytes required.
        expected: usize,
        /// The number of bytes received.
        got: usize,
    },
    /// A word carried non-zero bytes where the type requires zero padding.
    #[error("abi: non-canonical padding for {0}")]
    InvalidPadding(ParamType),
    /// The ABI declares a type this codec does not support.
    #[error("abi: unsupported type '{0}'")]
    UnsupportedType(String),
    /// The ABI definition itself could not be parsed.
    #[error("abi: invalid definition: {0}")]
    InvalidAbi(String),
    /// The named function is not present in the ABI definition.
    #[error("abi: function '{0}' not found")]
    FunctionNotFound(String),
    /// The supplied arguments do not match the function's inputs.
    #[error("abi: argument mismatch: {0}")]
    ArgumentMismatch(String),
}

/// Any failure of a typed read-only contract query: either the call itself or
/// the codec around it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The execution context failed the call.
    #[error(transparent)]
    Vm(#[from] VmError),
    /// Encoding the input or decoding the output failed.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl CallError {
    /// Returns true if this is the distinguished "empty result" codec failure.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, CallError::Codec(CodecError::EmptyResult))
    }
}

/// Which bootstrap state made the registry unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotDeployedReason {
    /// There is no contract code at the registry address.
    NoCode,
    /// Code is present (a proxy) but the lookup returned no data, i.e. no
    /// implementation has been bound yet.
    NoImplementation,
}

/// Errors returned when resolving a service address through the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry indirection layer is not usable yet in this context.
    #[error("registry contract not deployed")]
    RegistryNotDeployed {
        /// The bootstrap state that was observed.
        reason: NotDeployedReason,
    },
    /// The registry answered, but no contract is bound to the identifier.
    #[error("no contract registered for identifier {0}")]
    ServiceNotRegistered(RegistryId),
    /// The lookup call failed for any other reason. Passed through unchanged.
    #[error(transparent)]
    Call(#[from] CallError),
}

impl RegistryError {
    /// Returns true for `RegistryNotDeployed`, whatever the reason.
    pub fn is_not_deployed(&self) -> bool {
        matches!(self, RegistryError::RegistryNotDeployed { .. })
    }

    /// Returns true for `ServiceNotRegistered`.
    pub fn is_service_not_registered(&self) -> bool {
        matches!(self, RegistryError::ServiceNotRegistered(_))
    }
}

/// Errors related to loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid TOML for the expected structure.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
