//! Wallet provider port.
//!
//! A wallet provider grants access to accounts and binds contract handles.
//! It is handed to the session explicitly rather than discovered from
//! ambient state.

use std::sync::Arc;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use super::betting::BettingContract;
use super::token::TokenContract;
use crate::error::Result;

/// Port for wallet access.
///
/// # Errors
///
/// Methods return [`Result`] for provider and transport failures. A
/// rejected access request is reported as
/// [`WalletError::AccessDenied`](crate::error::WalletError::AccessDenied).
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet for permission to read its accounts.
    async fn request_accounts(&self) -> Result<()>;

    /// Accounts exposed by the wallet, preferred account first.
    async fn accounts(&self) -> Result<Vec<Address>>;

    /// Chain the wallet is connected to.
    async fn chain_id(&self) -> Result<u64>;

    /// Native currency balance of `account`, in wei.
    async fn balance(&self, account: Address) -> Result<U256>;

    /// Bind the betting contract deployed at `address`.
    fn bind_betting(&self, address: Address) -> Result<Arc<dyn BettingContract>>;

    /// Bind the ERC-20 token deployed at `address`.
    fn bind_token(&self, address: Address) -> Result<Arc<dyn TokenContract>>;

    /// Short description for logs and display (e.g. the RPC endpoint).
    fn describe(&self) -> String;
}
