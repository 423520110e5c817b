//! Wallet session state.
//!
//! A [`Session`] holds the active account, a loading flag and the contract
//! handles bound during [`Session::initialize`]. The wallet provider is
//! passed in by the caller; nothing is read from global state.
//!
//! The loading flag starts raised, and every initialization attempt clears
//! it exactly once when it finishes, whether it succeeded or not. Only a new
//! call to [`Session::initialize`] raises it again.

use std::sync::Arc;

use alloy_primitives::Address;
use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{error, info};

use crate::error::{ContractError, Result, WalletError};
use crate::port::outbound::betting::BettingContract;
use crate::port::outbound::token::TokenContract;
use crate::port::outbound::wallet::WalletProvider;

/// A deployed contract: address plus the chain it lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub chain_id: u64,
}

/// Contracts the session binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTargets {
    pub betting: Deployment,
    pub token: Option<Deployment>,
}

/// Contract handles produced by a successful initialization.
#[derive(Clone)]
pub struct BoundContracts {
    pub betting: Arc<dyn BettingContract>,
    pub token: Option<Arc<dyn TokenContract>>,
}

/// Wallet session: account, loading flag and bound contracts.
pub struct Session {
    account: RwLock<Option<Address>>,
    chain_id: RwLock<Option<u64>>,
    provider: RwLock<Option<Arc<dyn WalletProvider>>>,
    contracts: RwLock<Option<BoundContracts>>,
    loading: watch::Sender<bool>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with no account and the loading flag raised.
    #[must_use]
    pub fn new() -> Self {
        let (loading, _) = watch::channel(true);
        Self {
            account: RwLock::new(None),
            chain_id: RwLock::new(None),
            provider: RwLock::new(None),
            contracts: RwLock::new(None),
            loading,
        }
    }

    /// Connect to the wallet and bind the target contracts.
    ///
    /// Steps: require a provider, request account access, take the first
    /// account, check each deployment's chain against the wallet's chain,
    /// bind the contracts. State from an earlier attempt is dropped first, so
    /// a failed attempt leaves no account or contracts behind. Failures are
    /// logged and returned; the loading flag is cleared in every case.
    ///
    /// # Errors
    ///
    /// - [`WalletError::Unavailable`] when `provider` is `None`
    /// - [`WalletError::AccessDenied`] when the access request is rejected
    /// - [`WalletError::NoAccounts`] when the wallet exposes no account
    /// - [`ContractError::WrongNetwork`] on a chain mismatch
    /// - any provider or binding error
    pub async fn initialize(
        &self,
        provider: Option<Arc<dyn WalletProvider>>,
        targets: &SessionTargets,
    ) -> Result<()> {
        self.loading.send_if_modified(|loading| {
            let was_loading = *loading;
            *loading = true;
            !was_loading
        });
        self.reset();

        let result = self.connect(provider, targets).await;
        if let Err(e) = &result {
            error!(error = %e, "Session initialization failed");
        }

        self.loading.send_replace(false);
        result
    }

    fn reset(&self) {
        *self.account.write() = None;
        *self.chain_id.write() = None;
        *self.contracts.write() = None;
        *self.provider.write() = None;
    }

    async fn connect(
        &self,
        provider: Option<Arc<dyn WalletProvider>>,
        targets: &SessionTargets,
    ) -> Result<()> {
        let provider = provider.ok_or(WalletError::Unavailable)?;

        provider.request_accounts().await?;
        let accounts = provider.accounts().await?;
        let account = *accounts.first().ok_or(WalletError::NoAccounts)?;
        *self.account.write() = Some(account);
        info!(%account, wallet = %provider.describe(), "Account connected");

        let chain_id = provider.chain_id().await?;
        *self.chain_id.write() = Some(chain_id);
        check_chain("betting", targets.betting, chain_id)?;
        if let Some(token) = targets.token {
            check_chain("token", token, chain_id)?;
        }

        let betting = provider.bind_betting(targets.betting.address)?;
        let token = targets
            .token
            .map(|token| provider.bind_token(token.address))
            .transpose()?;
        info!(
            betting = %targets.betting.address,
            token = token.is_some(),
            chain_id,
            "Contracts bound"
        );

        *self.contracts.write() = Some(BoundContracts { betting, token });
        *self.provider.write() = Some(provider);
        Ok(())
    }

    /// Active account, once connected.
    #[must_use]
    pub fn account(&self) -> Option<Address> {
        *self.account.read()
    }

    /// Active account, or an error if none is connected.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::NoAccounts`] before a successful connection.
    pub fn require_account(&self) -> Result<Address> {
        self.account().ok_or_else(|| WalletError::NoAccounts.into())
    }

    /// Chain reported by the wallet during initialization.
    #[must_use]
    pub fn chain_id(&self) -> Option<u64> {
        *self.chain_id.read()
    }

    /// Whether an initialization is pending or in progress.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Observe loading flag transitions.
    #[must_use]
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Wallet provider of the last successful initialization.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Unavailable`] before a successful initialization.
    pub fn provider(&self) -> Result<Arc<dyn WalletProvider>> {
        self.provider
            .read()
            .clone()
            .ok_or_else(|| WalletError::Unavailable.into())
    }

    /// Bound betting contract.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotBound`] before a successful initialization.
    pub fn betting(&self) -> Result<Arc<dyn BettingContract>> {
        self.contracts
            .read()
            .as_ref()
            .map(|contracts| Arc::clone(&contracts.betting))
            .ok_or_else(|| ContractError::NotBound("betting").into())
    }

    /// Bound token contract, when one is configured.
    #[must_use]
    pub fn token(&self) -> Option<Arc<dyn TokenContract>> {
        self.contracts
            .read()
            .as_ref()
            .and_then(|contracts| contracts.token.clone())
    }
}

fn check_chain(contract: &'static str, deployment: Deployment, actual: u64) -> Result<()> {
    if deployment.chain_id != actual {
        return Err(ContractError::WrongNetwork {
            contract,
            expected: deployment.chain_id,
            actual,
        }
        .into());
    }
    Ok(())
}
