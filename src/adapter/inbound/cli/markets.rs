//! Handler for the `markets` command.

use serde_json::json;
use tabled::Table;
use tracing::error;

use crate::adapter::inbound::cli::command::MarketsArgs;
use crate::adapter::inbound::cli::render::MarketRow;
use crate::adapter::inbound::cli::{output, session};
use crate::application::catalog;
use crate::application::listing::{self, ListingQuery};
use crate::domain::BetMap;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::port::outbound::betting::BettingContract;

/// Shown when market aggregation fails. No partial list is printed.
pub const MARKETS_FAILED: &str = "Failed to fetch markets. Please try again later.";

/// Read every market behind a spinner. Any failure becomes the
/// [`MARKETS_FAILED`] alert and no markets are returned.
///
/// # Errors
///
/// Returns [`Error::Alert`](crate::error::Error::Alert) wrapping the read or
/// timeout error.
pub async fn load_markets(
    contract: &dyn BettingContract,
    concurrency: usize,
    timeout_secs: Option<u64>,
) -> Result<BetMap> {
    let pb = output::spinner("Fetching markets");
    match bootstrap::with_timeout(timeout_secs, catalog::fetch_markets(contract, concurrency))
        .await
    {
        Ok(markets) => {
            output::spinner_success(&pb, &format!("Fetched {} markets", markets.len()));
            Ok(markets)
        }
        Err(e) => {
            output::spinner_fail(&pb, "Fetching markets");
            error!(error = %e, "Error fetching markets");
            Err(e.alert(MARKETS_FAILED))
        }
    }
}

/// Execute `markets`.
pub async fn execute(args: &MarketsArgs) -> Result<()> {
    let config = session::load_config(&args.config.config)?;
    let session = session::connect(&config).await?;
    let contract = session.betting()?;

    let markets = load_markets(
        contract.as_ref(),
        config.fetch.concurrency,
        config.network.timeout_secs,
    )
    .await?;

    let query = ListingQuery {
        search: args.search.clone(),
        sort: args.sort.into(),
        open_only: args.open,
    };
    let rows = listing::summarize(&markets, &query);

    if output::is_json() {
        output::json_output(json!({
            "command": "markets",
            "account": session.account(),
            "total": markets.len(),
            "markets": rows,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Markets");
    if rows.is_empty() {
        output::note("No markets match");
        return Ok(());
    }

    let table = Table::new(rows.iter().map(MarketRow::from)).to_string();
    output::lines(&table);
    output::note(&format!("{} of {} markets", rows.len(), markets.len()));
    Ok(())
}
