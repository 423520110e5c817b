//! Stake token port.

use alloy_primitives::Address;
use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::Result;

/// Balance of an account in an ERC-20 token, already scaled by the token's
/// decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalance {
    pub symbol: String,
    pub amount: Decimal,
}

/// Read access to an ERC-20 token contract.
#[async_trait]
pub trait TokenContract: Send + Sync {
    /// Deployed address of the token.
    fn address(&self) -> Address;

    /// Balance held by `owner`.
    async fn balance_of(&self, owner: Address) -> Result<TokenBalance>;
}
