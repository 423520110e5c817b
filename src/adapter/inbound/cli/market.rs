//! Handler for the `market` command.

use serde_json::json;
use tracing::error;

use crate::adapter::inbound::cli::command::MarketArgs;
use crate::adapter::inbound::cli::render::{amount, status_label};
use crate::adapter::inbound::cli::output::{self, Tone};
use crate::adapter::inbound::cli::session;
use crate::application::catalog;
use crate::application::listing::MarketSummary;
use crate::domain::price::{format_percentage, ratio_percentage};
use crate::domain::{BetId, DomainError, Side};
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap;

/// Shown when the market cannot be read.
pub const MARKET_FAILED: &str = "Failed to fetch the market. Please try again later.";

/// Execute `market <id>`.
pub async fn execute(args: &MarketArgs) -> Result<()> {
    let id = BetId::new(args.id)?;
    let config = session::load_config(&args.config.config)?;
    let session = session::connect(&config).await?;
    let contract = session.betting()?;

    let pb = output::spinner(&format!("Fetching market {id}"));
    let fetched = bootstrap::with_timeout(
        config.network.timeout_secs,
        catalog::lookup_market(contract.as_ref(), id),
    )
    .await;
    let market = match fetched {
        Ok(market) => {
            output::spinner_success(&pb, &format!("Fetched market {id}"));
            market
        }
        Err(e @ Error::Domain(DomainError::UnknownBet { .. })) => {
            output::spinner_fail(&pb, &format!("Fetching market {id}"));
            return Err(e);
        }
        Err(e) => {
            output::spinner_fail(&pb, &format!("Fetching market {id}"));
            error!(error = %e, %id, "Error fetching market");
            return Err(e.alert(MARKET_FAILED));
        }
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "market",
            "market": MarketSummary::from(&market),
            "ratio_a": market.ratio_a,
            "ratio_b": market.ratio_b,
        }));
        return Ok(());
    }

    output::section(&market.description);
    output::field("ID", id);
    output::field(
        "Status",
        status_label(market.status(), &market.option_a, &market.option_b),
    );
    output::field("Volume", amount(market.volume()));
    if market.has_placeholder_image() {
        output::field("Image", output::toned("(none)", Tone::Muted));
    } else {
        output::field("Image", &market.image);
    }

    for side in Side::ALL {
        output::section(&format!("Option {side}: {}", market.title(side)));
        output::field("Share", format_percentage(market.percentage(side)));
        output::field("Staked", amount(market.total(side)));
        let ratio = match side {
            Side::A => market.ratio_a,
            Side::B => market.ratio_b,
        };
        output::field("Price", format_percentage(Some(ratio_percentage(ratio))));
    }

    Ok(())
}
