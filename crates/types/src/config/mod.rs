// Path: crates/types/src/config/mod.rs

//! Shared configuration structures for the registry resolver.
use crate::app::Address;
use crate::error::ConfigError;
use crate::registry::{MAX_GAS_FOR_GET_ADDRESS_FOR, REGISTRY_CONTRACT_ADDRESS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a registry lookup that returns no data at all is reported.
///
/// An empty result means the registry proxy exists but has no implementation
/// bound yet. It is a different bootstrap state from "no code at the registry
/// address", but callers usually treat both the same way.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub enum EmptyResultPolicy {
    /// Report the empty result as `RegistryNotDeployed` (reason `NoImplementation`).
    #[default]
    TreatAsNotDeployed,
    /// Pass the codec's empty-result failure through unchanged.
    Propagate,
}

/// Configuration for the registry resolver (`registry.toml`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// The fixed address of the registry contract.
    #[serde(default = "default_registry_address")]
    pub registry_address: Address,
    /// The gas ceiling for a single lookup call.
    #[serde(default = "default_gas_ceiling")]
    pub gas_ceiling: u64,
    /// The sender used for protocol-internal static calls.
    #[serde(default)]
    pub system_caller: Address,
    /// How an empty lookup result is classified.
    #[serde(default)]
    pub empty_result_policy: EmptyResultPolicy,
}

fn default_registry_address() -> Address {
    REGISTRY_CONTRACT_ADDRESS
}
fn default_gas_ceiling() -> u64 {
    MAX_GAS_FOR_GET_ADDRESS_FOR
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            registry_address: default_registry_address(),
            gas_ceiling: default_gas_ceiling(),
            system_caller: Address::ZERO,
            empty_result_policy: EmptyResultPolicy::default(),
        }
    }
}

impl RegistryConfig {
    /// Returns a default configuration pointing at a different registry address.
    pub fn with_registry_address(registry_address: Address) -> Self {
        Self {
            registry_address,
            ..Self::default()
        }
    }

    /// Parses and validates a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: RegistryConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
        tracing::info!(
            target: "config",
            path = %path.display(),
            registry = %config.registry_address,
            gas_ceiling = config.gas_ceiling,
            "Loaded registry configuration"
        );
        Ok(config)
    }

    /// Rejects values that would make every lookup fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registry_address.is_zero() {
            return Err(ConfigError::Invalid(
                "registry_address must not be the zero address".into(),
            ));
        }
        if self.gas_ceiling == 0 {
            return Err(ConfigError::Invalid(
                "gas_ceiling must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
