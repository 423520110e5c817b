//! Betting contract port.
//!
//! The read surface of the prediction-market contract. Implementations
//! return raw, still-scaled records; normalization happens in the domain.

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::domain::{BetId, BetRecord, Side, UserBetRecord};
use crate::error::Result;

/// Read access to a deployed betting contract.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait BettingContract: Send + Sync {
    /// Deployed address of the contract.
    fn address(&self) -> Address;

    /// Number of markets created so far (`betCount()`).
    async fn bet_count(&self) -> Result<u64>;

    /// Raw fields of one market (`bets(id)`).
    async fn bet(&self, id: BetId) -> Result<BetRecord>;

    /// Positions of `from` on one side (`getUserBets(isOptionA)` called with
    /// `from` as the sender).
    async fn user_bets(&self, side: Side, from: Address) -> Result<Vec<UserBetRecord>>;
}
