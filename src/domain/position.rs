//! A user's positions, partitioned by option side.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;
use super::fixed_point;
use super::id::BetId;
use super::market::Side;
use super::record::UserBetRecord;

/// A user's stake on one side of one market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserBet {
    pub bet_id: BetId,
    /// Staked amount, normalized.
    pub amount: Decimal,
    /// Average ratio paid, normalized (`0.4` means 40%).
    pub average_ratio: Decimal,
}

impl UserBet {
    /// Normalize a raw `getUserBets` entry.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when a field is out of range or the bet id
    /// is zero.
    pub fn from_raw(raw: UserBetRecord) -> Result<Self, DomainError> {
        Ok(Self {
            bet_id: BetId::new(fixed_point::integer("betId", raw.bet_id)?)?,
            amount: fixed_point::normalize("amount", raw.amount)?,
            average_ratio: fixed_point::normalize("averageRatio", raw.average_ratio)?,
        })
    }
}

/// Positions of one user: option-A entries and option-B entries, each in
/// the order the contract returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Positions {
    pub a: Vec<UserBet>,
    pub b: Vec<UserBet>,
}

impl Positions {
    /// Entries for one side.
    #[must_use]
    pub fn side(&self, side: Side) -> &[UserBet] {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// All entries tagged with their side, A-side first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &UserBet)> {
        self.a
            .iter()
            .map(|bet| (Side::A, bet))
            .chain(self.b.iter().map(|bet| (Side::B, bet)))
    }

    /// Distinct market ids referenced by any entry, in first-seen order.
    #[must_use]
    pub fn bet_ids(&self) -> Vec<BetId> {
        let mut seen = BTreeSet::new();
        self.iter()
            .map(|(_, bet)| bet.bet_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }
}
