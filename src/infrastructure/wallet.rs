//! Wallet overview facade for the CLI.
//!
//! Collects what the `account` command shows about the session account:
//! the chain, the native balance and the stake token balance.

use alloy_primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::application::Session;
use crate::domain::{fixed_point, units, DomainError};
use crate::error::Result;

/// Account summary for display.
#[derive(Debug, Clone, Serialize)]
pub struct WalletOverview {
    pub account: Address,
    pub chain_id: Option<u64>,
    pub wallet: String,
    /// Native balance in ether.
    pub balance: Decimal,
    /// Stake token balance, when a token is configured and readable.
    pub token: Option<TokenHolding>,
}

/// Token balance for display.
#[derive(Debug, Clone, Serialize)]
pub struct TokenHolding {
    pub address: Address,
    pub symbol: String,
    pub amount: Decimal,
}

/// Convert a wei balance to ether.
///
/// # Errors
///
/// Returns [`DomainError::ValueOutOfRange`] for balances beyond the decimal
/// range.
pub fn wei_balance_to_ether(wei: U256) -> std::result::Result<Decimal, DomainError> {
    let wei = fixed_point::to_decimal("balance", wei, 0)?;
    Ok(units::wei_to_ether(wei))
}

/// Wallet service providing CLI operations.
pub struct WalletService;

impl WalletService {
    /// Summarize the session account.
    ///
    /// A failing token read is logged and omitted rather than failing the
    /// whole overview.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has no account or the native balance
    /// cannot be read.
    pub async fn overview(session: &Session) -> Result<WalletOverview> {
        let account = session.require_account()?;
        let provider = session.provider()?;
        let balance = wei_balance_to_ether(provider.balance(account).await?)?;

        let token = match session.token() {
            Some(token) => match token.balance_of(account).await {
                Ok(holding) => Some(TokenHolding {
                    address: token.address(),
                    symbol: holding.symbol,
                    amount: holding.amount,
                }),
                Err(e) => {
                    warn!(error = %e, "Failed to read token balance");
                    None
                }
            },
            None => None,
        };

        Ok(WalletOverview {
            account,
            chain_id: session.chain_id(),
            wallet: provider.describe(),
            balance,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn wei_balance_converts_to_ether() {
        let wei = U256::from(15u128 * 10u128.pow(17));
        assert_eq!(wei_balance_to_ether(wei).unwrap(), dec!(1.5));
    }

    #[test]
    fn huge_balance_is_out_of_range() {
        assert!(wei_balance_to_ether(U256::MAX).is_err());
    }
}
