//! Market aggregation.
//!
//! Reads the bet count once, then one market per id from 1 through the
//! count. A single failed read fails the whole aggregation; callers show an
//! error instead of a partial list.

use futures_util::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::domain::{BetId, BetMap, DomainError, Market};
use crate::error::Result;
use crate::port::outbound::betting::BettingContract;

/// Read and normalize one market.
///
/// # Errors
///
/// Returns contract read errors and [`DomainError::ValueOutOfRange`].
pub async fn fetch_market(contract: &dyn BettingContract, id: BetId) -> Result<Market> {
    let raw = contract.bet(id).await?;
    Ok(Market::from_raw(id, raw)?)
}

/// Read one market after checking that the contract knows its id.
///
/// # Errors
///
/// Returns [`DomainError::UnknownBet`] for ids above the bet count, plus
/// everything [`fetch_market`] returns.
pub async fn lookup_market(contract: &dyn BettingContract, id: BetId) -> Result<Market> {
    let count = contract.bet_count().await?;
    if id.get() > count {
        return Err(DomainError::UnknownBet { id, count }.into());
    }
    fetch_market(contract, id).await
}

/// Read every market the contract reports.
///
/// With `concurrency == 1` each read is awaited before the next id is
/// requested, in increasing id order. Larger values keep at most that many
/// reads in flight; results are still collected by id.
///
/// # Errors
///
/// Returns the first read or normalization error.
pub async fn fetch_markets(contract: &dyn BettingContract, concurrency: usize) -> Result<BetMap> {
    let count = contract.bet_count().await?;
    debug!(count, concurrency, "Fetching markets");

    let markets: BetMap = stream::iter(BetId::range(count))
        .map(|id| async move { fetch_market(contract, id).await.map(|market| (id, market)) })
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    info!(markets = markets.len(), "Markets loaded");
    Ok(markets)
}
