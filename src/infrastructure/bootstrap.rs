//! Infrastructure bootstrap helpers for session wiring.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::adapter::outbound::evm::EvmWallet;
use crate::application::{Deployment, Session, SessionTargets};
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::wallet::WalletProvider;

/// Resolve the configured contract deployments.
///
/// # Errors
///
/// Returns a configuration error for malformed addresses.
pub fn session_targets(config: &Config) -> Result<SessionTargets> {
    let betting = Deployment {
        address: config.contracts.betting.parsed_address("betting.address")?,
        chain_id: config.contracts.betting.chain_id,
    };
    let token = config
        .contracts
        .token
        .as_ref()
        .map(|token| -> Result<Deployment> {
            Ok(Deployment {
                address: token.parsed_address("token.address")?,
                chain_id: token.chain_id,
            })
        })
        .transpose()?;
    Ok(SessionTargets { betting, token })
}

/// Build the wallet provider, or `None` when no RPC endpoint is configured.
///
/// # Errors
///
/// Returns an error for an invalid endpoint, private key or watch address.
pub fn wallet_provider(config: &Config) -> Result<Option<Arc<dyn WalletProvider>>> {
    let Some(rpc_url) = config.rpc_url() else {
        warn!("No RPC endpoint configured");
        return Ok(None);
    };

    let wallet = EvmWallet::connect(
        rpc_url,
        config.wallet.private_key.as_deref(),
        config.watch_address()?,
    )?;
    Ok(Some(Arc::new(wallet)))
}

/// Create a session and initialize it against the configured wallet.
///
/// # Errors
///
/// Returns wallet, network and binding errors from
/// [`Session::initialize`].
pub async fn open_session(config: &Config) -> Result<Session> {
    let targets = session_targets(config)?;
    let provider = wallet_provider(config)?;

    let session = Session::new();
    session.initialize(provider, &targets).await?;
    info!(
        account = ?session.account(),
        chain_id = ?session.chain_id(),
        "Session ready"
    );
    Ok(session)
}

/// Run `fut` under the configured per-command timeout, if any.
///
/// # Errors
///
/// Returns [`Error::Timeout`] when the deadline passes first.
pub async fn with_timeout<T, F>(timeout_secs: Option<u64>, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match timeout_secs {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), fut)
            .await
            .map_err(|_| Error::Timeout(secs))?,
        None => fut.await,
    }
}
