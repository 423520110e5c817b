//! Network endpoint and deployed contract configuration.

use std::str::FromStr;

use alloy_primitives::Address;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Address of the betting contract used when none is configured.
pub const DEFAULT_BETTING_ADDRESS: &str = "0x370D4C121079c507C2d279fD03F68205E0c516b0";

/// Chain id of a local development node.
pub const DEFAULT_CHAIN_ID: u64 = 1337;

/// JSON-RPC endpoint settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkConfig {
    /// Wallet/node RPC endpoint. Overridden by `BETBOARD_RPC_URL`.
    #[serde(default)]
    pub rpc_url: Option<String>,
    /// Per-command timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// A contract deployment: address plus the chain it lives on.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    pub address: String,
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
}

const fn default_chain_id() -> u64 {
    DEFAULT_CHAIN_ID
}

impl ContractConfig {
    /// Parse the configured address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for malformed addresses.
    pub fn parsed_address(&self, field: &'static str) -> Result<Address> {
        Address::from_str(self.address.trim()).map_err(|e| {
            ConfigError::InvalidValue {
                field,
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Deployed contracts the session binds to.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractsConfig {
    #[serde(default = "default_betting")]
    pub betting: ContractConfig,
    /// Optional stake token shown by the `account` command.
    #[serde(default)]
    pub token: Option<ContractConfig>,
}

fn default_betting() -> ContractConfig {
    ContractConfig {
        address: DEFAULT_BETTING_ADDRESS.to_string(),
        chain_id: DEFAULT_CHAIN_ID,
    }
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            betting: default_betting(),
            token: None,
        }
    }
}
