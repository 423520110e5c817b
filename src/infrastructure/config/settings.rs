//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for the RPC endpoint (`BETBOARD_RPC_URL`) and for sensitive values like
//! `WALLET_PRIVATE_KEY`.
//!
//! # Example
//!
//! ```no_run
//! use betboard::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::Deserialize;

use super::fetch::FetchConfig;
use super::logging::LoggingConfig;
use super::network::{ContractsConfig, NetworkConfig};
use super::wallet::WalletConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section has defaults, so an empty file is a valid configuration
/// that points at the default betting deployment with no wallet provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// RPC endpoint and timeouts.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Deployed contract addresses and chain ids.
    #[serde(default)]
    pub contracts: ContractsConfig,

    /// Account selection.
    ///
    /// Private key is loaded from `WALLET_PRIVATE_KEY` environment variable.
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Market read scheduling.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn read_keystore_password() -> Result<String> {
    if let Ok(password) = std::env::var("BETBOARD_KEYSTORE_PASSWORD") {
        return Ok(password);
    }
    if let Ok(path) = std::env::var("BETBOARD_KEYSTORE_PASSWORD_FILE") {
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let password = contents.trim().to_string();
        if password.is_empty() {
            return Err(ConfigError::MissingField {
                field: "BETBOARD_KEYSTORE_PASSWORD_FILE",
            }
            .into());
        }
        return Ok(password);
    }

    Err(ConfigError::MissingField {
        field: "BETBOARD_KEYSTORE_PASSWORD",
    }
    .into())
}

#[cfg(feature = "evm")]
fn decrypt_keystore_private_key(path: &str, password: &str) -> Result<String> {
    use alloy_signer_local::PrivateKeySigner;

    let signer = PrivateKeySigner::decrypt_keystore(path, password).map_err(|e| {
        ConfigError::InvalidValue {
            field: "keystore_path",
            reason: e.to_string(),
        }
    })?;
    Ok(format!("{:x}", signer.to_bytes()))
}

#[cfg(not(feature = "evm"))]
fn decrypt_keystore_private_key(_path: &str, _password: &str) -> Result<String> {
    Err(ConfigError::InvalidValue {
        field: "keystore_path",
        reason: "keystore support requires the evm feature".to_string(),
    }
    .into())
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies environment overrides: `BETBOARD_RPC_URL` replaces the RPC
    /// endpoint, and the private key comes from `WALLET_PRIVATE_KEY` or is
    /// decrypted from `keystore_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., malformed addresses, zero concurrency)
    /// - Keystore decryption fails when using keystore authentication
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Some(rpc_url) = non_empty_env("BETBOARD_RPC_URL") {
            config.network.rpc_url = Some(rpc_url);
        }

        // Load private key from environment variable (never from config file for security)
        config.wallet.private_key = non_empty_env("WALLET_PRIVATE_KEY");
        if config.wallet.private_key.is_none() {
            if let Some(ref keystore_path) = config.wallet.keystore_path {
                let password = read_keystore_password()?;
                config.wallet.private_key =
                    Some(decrypt_keystore_private_key(keystore_path, &password)?);
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load the file at `path` if it exists, otherwise fall back to defaults
    /// plus environment overrides.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for an existing file.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self, verbosity: u8) {
        self.logging.init(verbosity);
    }

    /// RPC endpoint, if any is configured.
    #[must_use]
    pub fn rpc_url(&self) -> Option<&str> {
        self.network
            .rpc_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Watch-only account, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a malformed address.
    #[allow(clippy::result_large_err)]
    pub fn watch_address(&self) -> Result<Option<Address>> {
        self.wallet
            .address
            .as_deref()
            .map(|raw| {
                Address::from_str(raw.trim()).map_err(|e| {
                    ConfigError::InvalidValue {
                        field: "wallet.address",
                        reason: e.to_string(),
                    }
                    .into()
                })
            })
            .transpose()
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if let Some(rpc_url) = self.rpc_url() {
            url::Url::parse(rpc_url).map_err(|e| ConfigError::InvalidValue {
                field: "rpc_url",
                reason: e.to_string(),
            })?;
        }
        if self.network.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        self.contracts.betting.parsed_address("betting.address")?;
        if self.contracts.betting.chain_id == 0 {
            return Err(ConfigError::InvalidValue {
                field: "betting.chain_id",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(token) = &self.contracts.token {
            token.parsed_address("token.address")?;
            if token.chain_id == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "token.chain_id",
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
        }

        self.watch_address()?;

        if self.fetch.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "concurrency",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }

        Ok(())
    }
}
