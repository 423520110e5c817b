//! Wallet configuration for account selection.

use serde::Deserialize;

/// Wallet configuration.
///
/// The session account is taken from, in order: a local signer
/// (`WALLET_PRIVATE_KEY` or `keystore_path`), the watch-only `address`, or
/// the first account the RPC node exposes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletConfig {
    /// Watch-only account address for read-only sessions.
    #[serde(default)]
    pub address: Option<String>,
    /// Optional keystore path for encrypted wallet storage.
    #[serde(default)]
    pub keystore_path: Option<String>,
    /// Private key loaded from `WALLET_PRIVATE_KEY` env var at runtime
    #[serde(skip)]
    pub private_key: Option<String>,
}
