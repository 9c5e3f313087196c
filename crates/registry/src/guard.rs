// Path: crates/registry/src/guard.rs

//! Deployment guard: checks for contract code before any call is attempted.

use sysreg_api::vm::ContractCaller;
use sysreg_types::app::Address;

/// Returns true if `ctx` has contract code at `address`.
///
/// A call into an address without code succeeds with empty return data, which
/// would be indistinguishable from an unconfigured proxy. Checking first keeps
/// the "nothing deployed" phase recognisable.
pub fn is_deployed<C: ContractCaller + ?Sized>(ctx: &C, address: &Address) -> bool {
    ctx.is_deployed(address)
}
