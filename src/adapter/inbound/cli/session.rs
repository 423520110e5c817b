//! Shared setup for commands that talk to the wallet.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::application::Session;
use crate::error::{Error, Result, WalletError};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Shown when no wallet provider is reachable.
pub const WALLET_UNAVAILABLE: &str =
    "No wallet detected. Set network.rpc_url in the config file or BETBOARD_RPC_URL.";

/// Shown when connecting the wallet or binding contracts fails.
pub const WALLET_LOAD_FAILED: &str =
    "Failed to load the wallet, accounts or contract. Check the console for details.";

/// Load the configuration at `path` (defaults when missing) and start logging.
///
/// # Errors
///
/// Returns configuration read, parse and validation errors.
pub fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load_or_default(path)?;
    config.init_logging(output::verbosity());
    Ok(config)
}

/// Open a wallet session, surfacing failures as user-facing alerts.
///
/// # Errors
///
/// Returns [`Error::Alert`] wrapping the underlying failure.
pub async fn connect(config: &Config) -> Result<Session> {
    let pb = output::spinner("Connecting wallet");
    let opened =
        bootstrap::with_timeout(config.network.timeout_secs, bootstrap::open_session(config))
            .await;

    match opened {
        Ok(session) => {
            output::spinner_success(&pb, "Wallet connected");
            Ok(session)
        }
        Err(e) => {
            output::spinner_fail(&pb, "Wallet connection failed");
            Err(surface(e))
        }
    }
}

fn surface(e: Error) -> Error {
    match e {
        Error::Wallet(WalletError::Unavailable) => e.alert(WALLET_UNAVAILABLE),
        other => other.alert(WALLET_LOAD_FAILED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContractError;

    #[test]
    fn missing_provider_gets_its_own_message() {
        let surfaced = surface(WalletError::Unavailable.into());
        assert_eq!(surfaced.to_string(), WALLET_UNAVAILABLE);
    }

    #[test]
    fn other_failures_share_the_load_message() {
        let surfaced = surface(
            ContractError::WrongNetwork {
                contract: "betting",
                expected: 1337,
                actual: 1,
            }
            .into(),
        );
        assert_eq!(surfaced.to_string(), WALLET_LOAD_FAILED);
        assert!(matches!(
            surfaced,
            Error::Alert { source, .. } if matches!(*source, Error::Contract(_))
        ));
    }
}
