// Path: crates/types/src/registry/mod.rs
//! Well-known registry service names and the protocol constants used to look
//! them up.

use crate::app::{address, Address, RegistryId};
use std::fmt;

/// The genesis address of the registry (proxy) contract.
pub const REGISTRY_CONTRACT_ADDRESS: Address = address!("000000000000000000000000000000000000ce10");

/// The gas ceiling for a single `getAddressFor` lookup.
pub const MAX_GAS_FOR_GET_ADDRESS_FOR: u64 = 100_000;

/// The name of the registry lookup function.
pub const GET_ADDRESS_FOR: &str = "getAddressFor";

/// The JSON ABI fragment of the registry lookup function.
pub const GET_ADDRESS_FOR_ABI: &str = r#"[{
    "constant": true,
    "inputs": [{ "name": "identifier", "type": "bytes32" }],
    "name": "getAddressFor",
    "outputs": [{ "name": "", "type": "address" }],
    "payable": false,
    "stateMutability": "view",
    "type": "function"
}]"#;

macro_rules! service_names {
    ($($variant:ident),* $(,)?) => {
        /// A protocol service whose address is published in the registry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ServiceName {
            $(
                #[allow(missing_docs)]
                $variant,
            )*
        }

        impl ServiceName {
            /// Every well-known service, in declaration order.
            pub const ALL: &'static [ServiceName] = &[$(ServiceName::$variant),*];

            /// The registry name, exactly as hashed into the identifier.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ServiceName::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

service_names!(
    Accounts,
    Attestations,
    BlockchainParameters,
    DoubleSigningSlasher,
    DowntimeSlasher,
    Election,
    EpochRewards,
    Escrow,
    Exchange,
    FeeCurrencyWhitelist,
    Freezer,
    GasPriceMinimum,
    GoldToken,
    Governance,
    LockedGold,
    Random,
    Reserve,
    SortedOracles,
    StableToken,
    TransferWhitelist,
    Validators,
);

impl ServiceName {
    /// The registry identifier for this service.
    pub fn id(&self) -> RegistryId {
        RegistryId::from_name(self.as_str())
    }

    /// Looks up a well-known service by its registry name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_address_is_ce10() {
        assert_eq!(
            REGISTRY_CONTRACT_ADDRESS.to_string().to_lowercase(),
            "0x000000000000000000000000000000000000ce10"
        );
    }

    #[test]
    fn service_ids_are_distinct() {
        let ids: HashSet<_> = ServiceName::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), ServiceName::ALL.len());
    }

    #[test]
    fn names_round_trip() {
        for service in ServiceName::ALL {
            assert_eq!(ServiceName::from_name(service.as_str()), Some(*service));
        }
        assert_eq!(ServiceName::from_name("Foo"), None);
        assert_eq!(
            ServiceName::Validators.id(),
            RegistryId::from_name("Validators")
        );
    }
}
