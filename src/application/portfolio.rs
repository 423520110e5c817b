//! Portfolio view model.
//!
//! Joins a user's positions with the markets they reference. Each entry is
//! one portfolio card: the chosen option, the amount added in ether, the
//! chosen side's current share of the pool and the user's average price.

use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use super::{catalog, position};
use crate::domain::{price, units, BetId, BetMap, MarketStatus, Positions, Side, UserBet};
use crate::error::Result;
use crate::port::outbound::betting::BettingContract;

/// One portfolio card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioEntry {
    pub bet_id: BetId,
    pub question: String,
    pub image: String,
    pub side: Side,
    /// Title of the option the user backed.
    pub chosen: String,
    /// Staked amount as normalized from the contract.
    pub amount: Decimal,
    /// Staked amount converted from wei to ether.
    pub amount_ether: Decimal,
    /// Chosen side's share of the pool, `None` while the pool is empty.
    pub current_price: Option<Decimal>,
    /// Average price paid, as a percentage.
    pub average_price: Decimal,
    pub status: MarketStatus,
}

impl PortfolioEntry {
    /// Whether the backed option won. `None` while the market is open.
    #[must_use]
    pub fn won(&self) -> Option<bool> {
        match self.status {
            MarketStatus::Open => None,
            MarketStatus::Resolved(winner) => Some(winner == self.side),
        }
    }
}

/// A user's portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Portfolio {
    pub account: Address,
    pub entries: Vec<PortfolioEntry>,
}

impl Portfolio {
    /// Sum of the amounts added across all entries, in ether.
    #[must_use]
    pub fn total_ether(&self) -> Decimal {
        self.entries.iter().map(|entry| entry.amount_ether).sum()
    }
}

fn entry(side: Side, bet: &UserBet, markets: &BetMap) -> Option<PortfolioEntry> {
    let Some(market) = markets.get(&bet.bet_id) else {
        warn!(bet_id = %bet.bet_id, "Position references an unknown market");
        return None;
    };

    Some(PortfolioEntry {
        bet_id: bet.bet_id,
        question: market.description.clone(),
        image: market.image.clone(),
        side,
        chosen: market.title(side).to_string(),
        amount: bet.amount,
        amount_ether: units::wei_to_ether(bet.amount),
        current_price: market.percentage(side),
        average_price: price::ratio_percentage(bet.average_ratio),
        status: market.status(),
    })
}

/// Build portfolio cards from positions and the markets they reference.
///
/// Option-A entries come first, then option-B, each in contract order.
/// Positions whose market is missing from `markets` are skipped.
#[must_use]
pub fn build(positions: &Positions, markets: &BetMap) -> Vec<PortfolioEntry> {
    positions
        .iter()
        .filter_map(|(side, bet)| entry(side, bet, markets))
        .collect()
}

/// Fetch `account`'s positions and the markets they reference.
///
/// Only referenced markets are read, one at a time.
///
/// # Errors
///
/// Returns the first contract read or normalization error.
pub async fn load(contract: &dyn BettingContract, account: Address) -> Result<Portfolio> {
    let positions = position::fetch_positions(contract, account).await?;

    let mut markets = BetMap::new();
    for id in positions.bet_ids() {
        let market = catalog::fetch_market(contract, id).await?;
        markets.insert(id, market);
    }

    Ok(Portfolio {
        account,
        entries: build(&positions, &markets),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Market;
    use rust_decimal_macros::dec;

    fn market(id: u64, total_a: Decimal, total_b: Decimal) -> Market {
        Market {
            id: BetId::new(id).unwrap(),
            option_a: "Yes".into(),
            option_b: "No".into(),
            description: format!("Market {id}"),
            image: "ipfs://img".into(),
            total_a,
            total_b,
            ratio_a: dec!(0.3),
            ratio_b: dec!(0.7),
            closed: false,
            a_won: false,
        }
    }

    fn bet(id: u64, amount: Decimal, average_ratio: Decimal) -> UserBet {
        UserBet {
            bet_id: BetId::new(id).unwrap(),
            amount,
            average_ratio,
        }
    }

    #[test]
    fn a_side_entry_uses_option_a_title_and_share() {
        let markets: BetMap = [(BetId::new(1).unwrap(), market(1, dec!(30), dec!(70)))]
            .into_iter()
            .collect();
        let positions = Positions {
            a: vec![bet(1, Decimal::from(10u64.pow(18)), dec!(0.4))],
            b: vec![],
        };

        let entries = build(&positions, &markets);

        assert_eq!(entries.len(), 1);
        let card = &entries[0];
        assert_eq!(card.side, Side::A);
        assert_eq!(card.chosen, "Yes");
        assert_eq!(card.amount_ether, dec!(1));
        assert_eq!(card.current_price, Some(dec!(30)));
        assert_eq!(card.average_price, dec!(40));
        assert_eq!(card.won(), None);
    }

    #[test]
    fn b_side_entry_uses_option_b_title_and_share() {
        let markets: BetMap = [(BetId::new(1).unwrap(), market(1, dec!(30), dec!(70)))]
            .into_iter()
            .collect();
        let positions = Positions {
            a: vec![],
            b: vec![bet(1, dec!(5), dec!(0.7))],
        };

        let card = &build(&positions, &markets)[0];
        assert_eq!(card.chosen, "No");
        assert_eq!(card.current_price, Some(dec!(70)));
        assert_eq!(card.average_price, dec!(70));
    }

    #[test]
    fn unknown_markets_are_skipped() {
        let markets: BetMap = [(BetId::new(1).unwrap(), market(1, dec!(1), dec!(1)))]
            .into_iter()
            .collect();
        let positions = Positions {
            a: vec![bet(1, dec!(1), dec!(0.5)), bet(9, dec!(1), dec!(0.5))],
            b: vec![],
        };

        let entries = build(&positions, &markets);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].bet_id.get(), 1);
    }

    #[test]
    fn won_reflects_resolution() {
        let mut resolved = market(1, dec!(1), dec!(1));
        resolved.closed = true;
        resolved.a_won = true;
        let markets: BetMap = [(resolved.id, resolved)].into_iter().collect();
        let positions = Positions {
            a: vec![bet(1, dec!(1), dec!(0.5))],
            b: vec![bet(1, dec!(1), dec!(0.5))],
        };

        let entries = build(&positions, &markets);
        assert_eq!(entries[0].won(), Some(true));
        assert_eq!(entries[1].won(), Some(false));
    }

    #[test]
    fn total_ether_sums_entries() {
        let markets: BetMap = [(BetId::new(1).unwrap(), market(1, dec!(1), dec!(1)))]
            .into_iter()
            .collect();
        let half = Decimal::from(5 * 10u64.pow(17));
        let positions = Positions {
            a: vec![bet(1, half, dec!(0.5))],
            b: vec![bet(1, half, dec!(0.5))],
        };
        let portfolio = Portfolio {
            account: Address::ZERO,
            entries: build(&positions, &markets),
        };
        assert_eq!(portfolio.total_ether(), dec!(1));
    }
}
