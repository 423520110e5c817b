//! ERC-20 stake token adapter.

use alloy_primitives::{Address, U256};
use alloy_provider::DynProvider;
use async_trait::async_trait;
use rust_decimal::Decimal;

use super::abi::IERC20;
use crate::domain::fixed_point;
use crate::error::{ContractError, Error, Result};
use crate::port::outbound::token::{TokenBalance, TokenContract};

/// ERC-20 token bound to an RPC provider.
pub struct EvmTokenContract {
    instance: IERC20::IERC20Instance<DynProvider>,
}

impl EvmTokenContract {
    /// Bind the token deployed at `address`.
    #[must_use]
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            instance: IERC20::new(address, provider),
        }
    }

    /// Convert token base units to a decimal amount.
    fn from_base_units(units: U256, decimals: u8) -> Result<Decimal> {
        let amount = fixed_point::to_decimal("balanceOf", units, u32::from(decimals))?;
        Ok(amount.normalize())
    }
}

fn call_failed(method: &'static str, err: alloy_contract::Error) -> Error {
    ContractError::Call {
        method,
        reason: err.to_string(),
    }
    .into()
}

#[async_trait]
impl TokenContract for EvmTokenContract {
    fn address(&self) -> Address {
        *self.instance.address()
    }

    async fn balance_of(&self, owner: Address) -> Result<TokenBalance> {
        let balance: U256 = self
            .instance
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| call_failed("balanceOf", e))?;
        let decimals: u8 = self
            .instance
            .decimals()
            .call()
            .await
            .map_err(|e| call_failed("decimals", e))?;
        let symbol: String = self
            .instance
            .symbol()
            .call()
            .await
            .map_err(|e| call_failed("symbol", e))?;

        Ok(TokenBalance {
            symbol,
            amount: Self::from_base_units(balance, decimals)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn from_base_units_applies_decimals() {
        let amount = EvmTokenContract::from_base_units(U256::from(1_500_000u64), 6).unwrap();
        assert_eq!(amount, dec!(1.5));
    }

    #[test]
    fn from_base_units_handles_eighteen_decimals() {
        let amount =
            EvmTokenContract::from_base_units(U256::from(10u128.pow(18)), 18).unwrap();
        assert_eq!(amount, dec!(1));
    }

    #[test]
    fn from_base_units_handles_zero() {
        let amount = EvmTokenContract::from_base_units(U256::ZERO, 6).unwrap();
        assert_eq!(amount, Decimal::ZERO);
    }

    #[test]
    fn from_base_units_rejects_huge_balances() {
        assert!(EvmTokenContract::from_base_units(U256::MAX, 18).is_err());
    }
}
