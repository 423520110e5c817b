//! JSON-RPC wallet provider.
//!
//! Accounts come from a local signer or a watch-only address when one is
//! configured. Otherwise the node is asked for access with
//! `eth_requestAccounts` and its `eth_accounts` list is used.

use std::str::FromStr;
use std::sync::Arc;

use alloy_primitives::{Address, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use tracing::{debug, info};

use super::betting::EvmBettingContract;
use super::token::EvmTokenContract;
use crate::error::{ConfigError, Result, WalletError};
use crate::port::outbound::betting::BettingContract;
use crate::port::outbound::token::TokenContract;
use crate::port::outbound::wallet::WalletProvider;

/// JSON-RPC "method not found".
const METHOD_NOT_FOUND: i64 = -32601;

/// EIP-1193 "user rejected the request".
const USER_REJECTED: i64 = 4001;

/// Where the session account comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccountSource {
    /// Address of a locally held private key.
    Signer(Address),
    /// Configured read-only address.
    Watch(Address),
    /// Accounts managed by the RPC node.
    Node,
}

/// Wallet provider backed by an HTTP JSON-RPC endpoint.
pub struct EvmWallet {
    provider: DynProvider,
    rpc_url: String,
    source: AccountSource,
}

impl EvmWallet {
    /// Connect to `rpc_url`.
    ///
    /// A `private_key` takes precedence over a `watch` address; with neither,
    /// accounts are requested from the node.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL or the private key is invalid.
    pub fn connect(
        rpc_url: &str,
        private_key: Option<&str>,
        watch: Option<Address>,
    ) -> Result<Self> {
        let url: url::Url = rpc_url.parse().map_err(|e: url::ParseError| {
            ConfigError::InvalidValue {
                field: "rpc_url",
                reason: e.to_string(),
            }
        })?;
        let provider = ProviderBuilder::new().connect_http(url).erased();

        let source = match (private_key, watch) {
            (Some(key), _) => {
                let signer = PrivateKeySigner::from_str(key.trim())
                    .map_err(|e| WalletError::Signer(e.to_string()))?;
                AccountSource::Signer(signer.address())
            }
            (None, Some(address)) => AccountSource::Watch(address),
            (None, None) => AccountSource::Node,
        };

        debug!(rpc_url, ?source, "Wallet provider connected");

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl WalletProvider for EvmWallet {
    async fn request_accounts(&self) -> Result<()> {
        if self.source != AccountSource::Node {
            return Ok(());
        }

        let requested = self
            .provider
            .raw_request::<_, Vec<Address>>("eth_requestAccounts".into(), ())
            .await;

        match requested {
            Ok(accounts) => {
                info!(count = accounts.len(), "Wallet access granted");
                Ok(())
            }
            Err(e) => match e.as_error_resp().map(|payload| payload.code) {
                // Plain nodes expose eth_accounts without a permission step
                Some(METHOD_NOT_FOUND) => {
                    debug!("eth_requestAccounts not supported, using eth_accounts");
                    Ok(())
                }
                Some(USER_REJECTED) => Err(WalletError::AccessDenied(e.to_string()).into()),
                _ => Err(WalletError::Rpc {
                    method: "eth_requestAccounts",
                    reason: e.to_string(),
                }
                .into()),
            },
        }
    }

    async fn accounts(&self) -> Result<Vec<Address>> {
        match self.source {
            AccountSource::Signer(address) | AccountSource::Watch(address) => Ok(vec![address]),
            AccountSource::Node => self.provider.get_accounts().await.map_err(|e| {
                WalletError::Rpc {
                    method: "eth_accounts",
                    reason: e.to_string(),
                }
                .into()
            }),
        }
    }

    async fn chain_id(&self) -> Result<u64> {
        self.provider.get_chain_id().await.map_err(|e| {
            WalletError::Rpc {
                method: "eth_chainId",
                reason: e.to_string(),
            }
            .into()
        })
    }

    async fn balance(&self, account: Address) -> Result<U256> {
        self.provider.get_balance(account).await.map_err(|e| {
            WalletError::Rpc {
                method: "eth_getBalance",
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn bind_betting(&self, address: Address) -> Result<Arc<dyn BettingContract>> {
        Ok(Arc::new(EvmBettingContract::new(
            address,
            self.provider.clone(),
        )))
    }

    fn bind_token(&self, address: Address) -> Result<Arc<dyn TokenContract>> {
        Ok(Arc::new(EvmTokenContract::new(address, self.provider.clone())))
    }

    fn describe(&self) -> String {
        self.rpc_url.clone()
    }
}
