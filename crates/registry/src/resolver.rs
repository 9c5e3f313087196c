// Path: crates/registry/src/resolver.rs

//! The registry resolver.

use crate::guard;
use sysreg_abi::Function;
use sysreg_api::vm::{query_contract, ContractCaller, UnchargedScope};
use sysreg_types::abi::Token;
use sysreg_types::app::{Address, RegistryId};
use sysreg_types::config::{EmptyResultPolicy, RegistryConfig};
use sysreg_types::error::{CallError, CodecError, NotDeployedReason, RegistryError};
use sysreg_types::registry::{ServiceName, GET_ADDRESS_FOR, GET_ADDRESS_FOR_ABI};

/// Resolves service identifiers through the registry contract.
///
/// The resolver holds only immutable configuration. Execution contexts are
/// passed per call and never retained, so one resolver can serve any number
/// of contexts, including concurrently.
#[derive(Debug, Clone)]
pub struct RegistryResolver {
    config: RegistryConfig,
    get_address_for: Function,
}

impl RegistryResolver {
    /// Creates a resolver for the registry described by `config`.
    pub fn new(config: RegistryConfig) -> Result<Self, CodecError> {
        Ok(Self {
            config,
            get_address_for: Function::from_json(GET_ADDRESS_FOR_ABI, GET_ADDRESS_FOR)?,
        })
    }

    /// The configuration this resolver was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns true if the registry contract has code in `ctx`.
    pub fn is_registry_deployed<C: ContractCaller + ?Sized>(&self, ctx: &C) -> bool {
        guard::is_deployed(ctx, &self.config.registry_address)
    }

    /// Returns the address currently bound to `id` in `ctx`.
    ///
    /// The lookup runs inside an [`UnchargedScope`], so its gas is never billed
    /// to the enclosing transaction, and under the configured gas ceiling.
    ///
    /// # Errors
    /// * [`RegistryError::RegistryNotDeployed`] if the registry has no code, or
    ///   (under [`EmptyResultPolicy::TreatAsNotDeployed`]) returned no data.
    /// * [`RegistryError::ServiceNotRegistered`] if `id` is bound to the zero address.
    /// * [`RegistryError::Call`] with the unchanged underlying failure otherwise.
    pub fn resolve_service_address<C: ContractCaller + ?Sized>(
        &self,
        ctx: &C,
        id: RegistryId,
    ) -> Result<Address, RegistryError> {
        let _uncharged = UnchargedScope::enter(ctx);

        if !self.is_registry_deployed(ctx) {
            return Err(RegistryError::RegistryNotDeployed {
                reason: NotDeployedReason::NoCode,
            });
        }

        let outcome = query_contract(
            ctx,
            self.config.system_caller,
            self.config.registry_address,
            &self.get_address_for,
            &[Token::from(id)],
            self.config.gas_ceiling,
        );
        self.classify(id, outcome)
    }

    /// Resolves a service by its registry name.
    pub fn resolve_by_name<C: ContractCaller + ?Sized>(
        &self,
        ctx: &C,
        name: &str,
    ) -> Result<Address, RegistryError> {
        self.resolve_service_address(ctx, RegistryId::from_name(name))
    }

    /// Resolves one of the well-known protocol services.
    pub fn resolve_well_known<C: ContractCaller + ?Sized>(
        &self,
        ctx: &C,
        service: ServiceName,
    ) -> Result<Address, RegistryError> {
        self.resolve_service_address(ctx, service.id())
    }

    fn classify(
        &self,
        id: RegistryId,
        outcome: Result<Vec<Token>, CallError>,
    ) -> Result<Address, RegistryError> {
        let tokens = match outcome {
            Ok(tokens) => tokens,
            Err(err)
                if err.is_empty_result()
                    && self.config.empty_result_policy == EmptyResultPolicy::TreatAsNotDeployed =>
            {
                return Err(RegistryError::RegistryNotDeployed {
                    reason: NotDeployedReason::NoImplementation,
                });
            }
            Err(err) => return Err(err.into()),
        };

        let address = tokens
            .into_iter()
            .next()
            .and_then(Token::into_address)
            .ok_or_else(|| {
                CallError::from(CodecError::ArgumentMismatch(format!(
                    "{} did not return an address",
                    GET_ADDRESS_FOR
                )))
            })?;

        if address.is_zero() {
            return Err(RegistryError::ServiceNotRegistered(id));
        }
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use sysreg_api::vm::{CallOutput, ChargeControl};
    use sysreg_types::error::VmError;

    enum Reply {
        Data(Vec<u8>),
        Fail(VmError),
        Panic,
    }

    /// A context that answers every call with a fixed reply and records
    /// metering events.
    struct ScriptedContext {
        deployed: bool,
        reply: Reply,
        depth: Cell<i32>,
        entered: Cell<u32>,
        released: Cell<u32>,
        calls: RefCell<Vec<(Address, Address, usize, u64, i32)>>,
    }

    impl ScriptedContext {
        fn new(deployed: bool, reply: Reply) -> Self {
            Self {
                deployed,
                reply,
                depth: Cell::new(0),
                entered: Cell::new(0),
                released: Cell::new(0),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn balanced_once(&self) -> bool {
            self.entered.get() == 1 && self.released.get() == 1 && self.depth.get() == 0
        }
    }

    impl ChargeControl for ScriptedContext {
        fn suspend_charging(&self) {
            self.entered.set(self.entered.get() + 1);
            self.depth.set(self.depth.get() + 1);
        }
        fn resume_charging(&self) {
            self.released.set(self.released.get() + 1);
            self.depth.set(self.depth.get() - 1);
        }
    }

    impl ContractCaller for ScriptedContext {
        fn is_deployed(&self, _address: &Address) -> bool {
            self.deployed
        }

        fn static_call(
            &self,
            caller: Address,
            target: Address,
            input: &[u8],
            gas_limit: u64,
        ) -> Result<CallOutput, VmError> {
            self.calls
                .borrow_mut()
                .push((caller, target, input.len(), gas_limit, self.depth.get()));
            match &self.reply {
                Reply::Data(data) => Ok(CallOutput {
                    gas_used: 1,
                    return_data: data.clone(),
                }),
                Reply::Fail(err) => Err(err.clone()),
                Reply::Panic => panic!("execution engine fault"),
            }
        }
    }

    fn resolver() -> RegistryResolver {
        RegistryResolver::new(RegistryConfig::default()).unwrap()
    }

    fn validators() -> RegistryId {
        ServiceName::Validators.id()
    }

    fn word(address: Address) -> Vec<u8> {
        address.into_word().to_vec()
    }

    #[test]
    fn missing_registry_code_is_not_deployed() {
        let ctx = ScriptedContext::new(false, Reply::Data(vec![]));
        let err = resolver()
            .resolve_service_address(&ctx, validators())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::RegistryNotDeployed {
                reason: NotDeployedReason::NoCode
            }
        );
        assert!(ctx.calls.borrow().is_empty());
        assert!(ctx.balanced_once());
    }

    #[test]
    fn empty_result_is_not_deployed_by_default() {
        let ctx = ScriptedContext::new(true, Reply::Data(vec![]));
        let err = resolver()
            .resolve_service_address(&ctx, validators())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::RegistryNotDeployed {
                reason: NotDeployedReason::NoImplementation
            }
        );
        assert!(ctx.balanced_once());
    }

    #[test]
    fn empty_result_can_be_propagated() {
        let config = RegistryConfig {
            empty_result_policy: EmptyResultPolicy::Propagate,
            ..RegistryConfig::default()
        };
        let resolver = RegistryResolver::new(config).unwrap();
        let ctx = ScriptedContext::new(true, Reply::Data(vec![]));
        let err = resolver
            .resolve_service_address(&ctx, validators())
            .unwrap_err();
        assert_eq!(err, RegistryError::Call(CallError::Codec(CodecError::EmptyResult)));
    }

    #[test]
    fn zero_address_is_not_registered() {
        let ctx = ScriptedContext::new(true, Reply::Data(vec![0u8; 32]));
        let id = RegistryId::from_name("Foo");
        let err = resolver().resolve_service_address(&ctx, id).unwrap_err();
        assert_eq!(err, RegistryError::ServiceNotRegistered(id));
        assert!(ctx.balanced_once());
    }

    #[test]
    fn bound_address_is_returned() {
        let bound = Address::with_last_byte(0xab);
        let ctx = ScriptedContext::new(true, Reply::Data(word(bound)));
        let resolved = resolver()
            .resolve_service_address(&ctx, validators())
            .unwrap();
        assert_eq!(resolved, bound);
        assert!(ctx.balanced_once());
    }

    #[test]
    fn call_is_bounded_uncharged_and_from_the_system_caller() {
        let ctx = ScriptedContext::new(true, Reply::Data(word(Address::with_last_byte(0x01))));
        let resolver = resolver();
        resolver.resolve_service_address(&ctx, validators()).unwrap();
        let calls = ctx.calls.borrow();
        let (caller, target, input_len, gas_limit, depth) = calls[0];
        assert_eq!(caller, Address::ZERO);
        assert_eq!(target, resolver.config().registry_address);
        assert_eq!(input_len, 36);
        assert_eq!(gas_limit, 100_000);
        assert_eq!(depth, 1, "call must run inside the uncharged scope");
    }

    #[test]
    fn other_failures_pass_through_unchanged() {
        for failure in [
            VmError::ExecutionReverted(b"nope".to_vec()),
            VmError::OutOfGas { limit: 100_000 },
            VmError::StateAccess("pruned".into()),
        ] {
            let ctx = ScriptedContext::new(true, Reply::Fail(failure.clone()));
            let err = resolver()
                .resolve_service_address(&ctx, validators())
                .unwrap_err();
            assert_eq!(err.to_string(), failure.to_string());
            assert_eq!(err, RegistryError::Call(CallError::Vm(failure)));
            assert!(ctx.balanced_once());
        }
    }

    #[test]
    fn malformed_data_is_a_codec_failure() {
        let mut dirty = vec![0u8; 32];
        dirty[0] = 0xff;
        let ctx = ScriptedContext::new(true, Reply::Data(dirty));
        let err = resolver()
            .resolve_service_address(&ctx, validators())
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Call(CallError::Codec(CodecError::InvalidPadding(_)))
        ));
    }

    #[test]
    fn partial_trailing_word_is_a_codec_failure() {
        let mut data = word(Address::with_last_byte(0xab));
        data.extend_from_slice(&[1, 2, 3]);
        let ctx = ScriptedContext::new(true, Reply::Data(data));
        let err = resolver()
            .resolve_service_address(&ctx, validators())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::Call(CallError::Codec(CodecError::InvalidLength {
                expected: 32,
                got: 35
            }))
        );
        assert!(ctx.balanced_once());
    }

    #[test]
    fn scope_is_released_when_the_context_panics() {
        let ctx = ScriptedContext::new(true, Reply::Panic);
        let resolver = resolver();
        let result = catch_unwind(AssertUnwindSafe(|| {
            resolver.resolve_service_address(&ctx, validators())
        }));
        assert!(result.is_err());
        assert!(ctx.balanced_once());
    }

    #[test]
    fn lookups_by_name_use_the_hashed_identifier() {
        let bound = Address::with_last_byte(0xe1);
        let ctx = ScriptedContext::new(true, Reply::Data(word(bound)));
        let resolver = resolver();
        assert_eq!(resolver.resolve_by_name(&ctx, "Election").unwrap(), bound);
        assert_eq!(
            resolver
                .resolve_well_known(&ctx, ServiceName::Election)
                .unwrap(),
            bound
        );
    }

    #[test]
    fn resolver_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RegistryResolver>();
    }
}
