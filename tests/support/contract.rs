//! Scripted in-memory betting contract.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use parking_lot::Mutex;

use betboard::domain::{BetId, BetRecord, Side, UserBetRecord};
use betboard::error::{ContractError, Result};
use betboard::port::outbound::betting::BettingContract;

/// Raw market record with the given scaled totals.
pub fn record(description: &str, total_a: u64, total_b: u64) -> BetRecord {
    BetRecord {
        option_a_title: "Yes".into(),
        option_b_title: "No".into(),
        description: description.into(),
        image_hash: format!("ipfs://{description}"),
        current_a_ratio: U256::from(50u64),
        current_b_ratio: U256::from(50u64),
        current_total_a_amount: U256::from(total_a),
        current_total_b_amount: U256::from(total_b),
        closed: false,
        a_won: false,
    }
}

/// Raw `getUserBets` entry.
pub fn user_bet(bet_id: u64, amount: u128, average_ratio: u64) -> UserBetRecord {
    UserBetRecord {
        amount: U256::from(amount),
        average_ratio: U256::from(average_ratio),
        bet_id: U256::from(bet_id),
    }
}

/// Betting contract answering from fixed data and counting reads.
#[derive(Default)]
pub struct ScriptedContract {
    bets: Vec<BetRecord>,
    user_bets: HashMap<(Address, Side), Vec<UserBetRecord>>,
    fail_on: Option<u64>,
    delays: HashMap<u64, Duration>,
    count_reads: AtomicUsize,
    bet_reads: Mutex<Vec<u64>>,
    user_bet_reads: Mutex<Vec<(Side, Address)>>,
}

impl ScriptedContract {
    /// Contract whose markets are `bets`, ids 1 through `bets.len()`.
    pub fn new(bets: Vec<BetRecord>) -> Self {
        Self {
            bets,
            ..Self::default()
        }
    }

    /// Make the `bets(id)` read fail.
    pub fn failing_on(mut self, id: u64) -> Self {
        self.fail_on = Some(id);
        self
    }

    /// Delay the `bets(id)` read.
    pub fn delaying(mut self, id: u64, delay: Duration) -> Self {
        self.delays.insert(id, delay);
        self
    }

    /// Script `getUserBets` for `user` on `side`.
    pub fn with_user_bets(mut self, user: Address, side: Side, bets: Vec<UserBetRecord>) -> Self {
        self.user_bets.insert((user, side), bets);
        self
    }

    pub fn count_reads(&self) -> usize {
        self.count_reads.load(Ordering::SeqCst)
    }

    /// Ids passed to `bets`, in call order.
    pub fn bet_reads(&self) -> Vec<u64> {
        self.bet_reads.lock().clone()
    }

    pub fn user_bet_reads(&self) -> Vec<(Side, Address)> {
        self.user_bet_reads.lock().clone()
    }
}

#[async_trait]
impl BettingContract for ScriptedContract {
    fn address(&self) -> Address {
        super::BETTING
    }

    async fn bet_count(&self) -> Result<u64> {
        self.count_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.bets.len() as u64)
    }

    async fn bet(&self, id: BetId) -> Result<BetRecord> {
        self.bet_reads.lock().push(id.get());
        if let Some(delay) = self.delays.get(&id.get()) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail_on == Some(id.get()) {
            return Err(ContractError::Call {
                method: "bets",
                reason: "execution reverted".into(),
            }
            .into());
        }
        let index = usize::try_from(id.get() - 1).unwrap_or(usize::MAX);
        Ok(self.bets.get(index).cloned().unwrap_or_default())
    }

    async fn user_bets(&self, side: Side, from: Address) -> Result<Vec<UserBetRecord>> {
        self.user_bet_reads.lock().push((side, from));
        Ok(self
            .user_bets
            .get(&(from, side))
            .cloned()
            .unwrap_or_default())
    }
}
