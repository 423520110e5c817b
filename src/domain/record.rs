//! Raw contract records.
//!
//! These mirror the betting contract's return values field for field, with
//! integers left in their scaled on-chain form. Adapters decode into these
//! types; [`Market::from_raw`](super::Market::from_raw) and
//! [`UserBet::from_raw`](super::UserBet::from_raw) turn them into domain
//! values.

use alloy_primitives::U256;

/// Raw result of `bets(id)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BetRecord {
    pub option_a_title: String,
    pub option_b_title: String,
    pub description: String,
    pub image_hash: String,
    pub current_a_ratio: U256,
    pub current_b_ratio: U256,
    pub current_total_a_amount: U256,
    pub current_total_b_amount: U256,
    pub closed: bool,
    pub a_won: bool,
}

/// Raw entry of `getUserBets(isOptionA)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserBetRecord {
    pub amount: U256,
    pub average_ratio: U256,
    pub bet_id: U256,
}
