//! Betting contract adapter.

use alloy_primitives::{Address, U256};
use alloy_provider::DynProvider;
use async_trait::async_trait;
use tracing::debug;

use super::abi::Betting;
use crate::domain::{fixed_point, BetId, BetRecord, Side, UserBetRecord};
use crate::error::{ContractError, Error, Result};
use crate::port::outbound::betting::BettingContract;

/// Betting contract bound to an RPC provider.
pub struct EvmBettingContract {
    instance: Betting::BettingInstance<DynProvider>,
}

impl EvmBettingContract {
    /// Bind the contract deployed at `address`.
    #[must_use]
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            instance: Betting::new(address, provider),
        }
    }
}

fn call_failed(method: &'static str, err: alloy_contract::Error) -> Error {
    ContractError::Call {
        method,
        reason: err.to_string(),
    }
    .into()
}

impl From<Betting::UserBet> for UserBetRecord {
    fn from(bet: Betting::UserBet) -> Self {
        Self {
            amount: bet.amount,
            average_ratio: bet.averageRatio,
            bet_id: bet.betId,
        }
    }
}

#[async_trait]
impl BettingContract for EvmBettingContract {
    fn address(&self) -> Address {
        *self.instance.address()
    }

    async fn bet_count(&self) -> Result<u64> {
        let count: U256 = self
            .instance
            .betCount()
            .call()
            .await
            .map_err(|e| call_failed("betCount", e))?;
        Ok(fixed_point::integer("betCount", count)?)
    }

    async fn bet(&self, id: BetId) -> Result<BetRecord> {
        debug!(bet_id = %id, "Reading bet");
        let raw = self
            .instance
            .bets(U256::from(id.get()))
            .call()
            .await
            .map_err(|e| call_failed("bets", e))?;

        Ok(BetRecord {
            option_a_title: raw.optionATitle,
            option_b_title: raw.optionBTitle,
            description: raw.description,
            image_hash: raw.imageHash,
            current_a_ratio: raw.currentARatio,
            current_b_ratio: raw.currentBRatio,
            current_total_a_amount: raw.currentTotalAAmount,
            current_total_b_amount: raw.currentTotalBAmount,
            closed: raw.closed,
            a_won: raw.aWon,
        })
    }

    async fn user_bets(&self, side: Side, from: Address) -> Result<Vec<UserBetRecord>> {
        debug!(%side, %from, "Reading user bets");
        let bets = self
            .instance
            .getUserBets(side.is_option_a())
            .from(from)
            .call()
            .await
            .map_err(|e| call_failed("getUserBets", e))?;

        Ok(bets.into_iter().map(UserBetRecord::from).collect())
    }
}
