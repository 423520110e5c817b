//! Market list view model.
//!
//! Turns an aggregated [`BetMap`] into rows for the market list, with the
//! search box and sort options of the list page.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{BetId, BetMap, Market, MarketStatus, Side};

/// Sort order of the market list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending id.
    #[default]
    Id,
    /// Largest total volume first, ties by ascending id.
    Volume,
    /// Most recently created (highest id) first.
    Newest,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "volume" => Ok(Self::Volume),
            "newest" => Ok(Self::Newest),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Filters applied to the market list.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// Case-insensitive substring matched against description and titles.
    pub search: Option<String>,
    pub sort: SortOrder,
    /// Hide closed markets.
    pub open_only: bool,
}

impl ListingQuery {
    fn matches(&self, market: &Market) -> bool {
        if self.open_only && market.closed {
            return false;
        }
        let Some(needle) = self.search.as_deref().map(str::trim) else {
            return true;
        };
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        [&market.description, &market.option_a, &market.option_b]
            .iter()
            .any(|text| text.to_lowercase().contains(&needle))
    }
}

/// One row of the market list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketSummary {
    pub id: BetId,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub image: String,
    pub total_amount: Decimal,
    pub total_a: Decimal,
    pub total_b: Decimal,
    /// Share staked on option A, `None` while nothing is staked.
    pub yes_percentage: Option<Decimal>,
    pub no_percentage: Option<Decimal>,
    pub status: MarketStatus,
}

impl From<&Market> for MarketSummary {
    fn from(market: &Market) -> Self {
        Self {
            id: market.id,
            question: market.description.clone(),
            option_a: market.option_a.clone(),
            option_b: market.option_b.clone(),
            image: market.image.clone(),
            total_amount: market.volume(),
            total_a: market.total_a,
            total_b: market.total_b,
            yes_percentage: market.percentage(Side::A),
            no_percentage: market.percentage(Side::B),
            status: market.status(),
        }
    }
}

/// Build the market list for `query`.
#[must_use]
pub fn summarize(markets: &BetMap, query: &ListingQuery) -> Vec<MarketSummary> {
    let mut rows: Vec<MarketSummary> = markets
        .values()
        .filter(|market| query.matches(market))
        .map(MarketSummary::from)
        .collect();

    match query.sort {
        SortOrder::Id => {}
        SortOrder::Volume => rows.sort_by(|a, b| {
            b.total_amount
                .cmp(&a.total_amount)
                .then_with(|| a.id.cmp(&b.id))
        }),
        SortOrder::Newest => rows.reverse(),
    }
    rows
}
