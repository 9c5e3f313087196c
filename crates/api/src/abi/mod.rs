// Path: crates/api/src/abi/mod.rs
//! Defines the capability interface for encoding contract calls.

use sysreg_types::abi::{ParamType, Token};
use sysreg_types::error::CodecError;

/// A single contract function that can shape call data and interpret the
/// bytes a call returns.
pub trait AbiFunction {
    /// The function name, e.g. `getAddressFor`.
    fn name(&self) -> &str;

    /// The declared output types, in order.
    fn outputs(&self) -> &[ParamType];

    /// Encodes a call to this function: selector followed by the arguments.
    fn encode_input(&self, args: &[Token]) -> Result<Vec<u8>, CodecError>;

    /// Decodes the raw return data into one token per declared output.
    ///
    /// Implementations must return [`CodecError::EmptyResult`] when `data` is
    /// empty but outputs are declared, so callers can recognise a call that
    /// produced no return data at all.
    fn decode_output(&self, data: &[u8]) -> Result<Vec<Token>, CodecError>;
}
