// Path: crates/api/src/vm/query.rs

//! The generic "run a read-only call and decode its typed result" primitive.

use super::ContractCaller;
use crate::abi::AbiFunction;
use sysreg_types::abi::Token;
use sysreg_types::app::Address;
use sysreg_types::error::CallError;

/// Encodes `args` for `function`, runs it as a static call against `target`
/// with a `gas_limit` ceiling, and decodes the returned bytes.
///
/// Failures keep their class: execution failures surface as
/// [`CallError::Vm`], encoding and decoding failures as [`CallError::Codec`].
pub fn query_contract<C, F>(
    ctx: &C,
    caller: Address,
    target: Address,
    function: &F,
    args: &[Token],
    gas_limit: u64,
) -> Result<Vec<Token>, CallError>
where
    C: ContractCaller + ?Sized,
    F: AbiFunction + ?Sized,
{
    let input = function.encode_input(args)?;
    let output = ctx.static_call(caller, target, &input, gas_limit)?;
    Ok(function.decode_output(&output.return_data)?)
}
