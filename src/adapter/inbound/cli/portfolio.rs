//! Handler for the `portfolio` command.

use std::str::FromStr;

use alloy_primitives::Address;
use serde_json::json;
use tabled::Table;
use tracing::error;

use crate::adapter::inbound::cli::command::PortfolioArgs;
use crate::adapter::inbound::cli::render::{amount, PositionRow};
use crate::adapter::inbound::cli::{output, session};
use crate::application::portfolio::{self, Portfolio};
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;
use crate::port::outbound::betting::BettingContract;

/// Shown when positions or their markets cannot be read.
pub const PORTFOLIO_FAILED: &str = "Failed to fetch your portfolio. Please try again later.";

fn parse_account(raw: &str) -> Result<Address> {
    Address::from_str(raw.trim()).map_err(|e| {
        ConfigError::InvalidValue {
            field: "account",
            reason: e.to_string(),
        }
        .into()
    })
}

/// Read the positions of `account` and their markets behind a spinner.
/// Any failure becomes the [`PORTFOLIO_FAILED`] alert.
///
/// # Errors
///
/// Returns [`Error::Alert`](crate::error::Error::Alert) wrapping the read or
/// timeout error.
pub async fn load_portfolio(
    contract: &dyn BettingContract,
    account: Address,
    timeout_secs: Option<u64>,
) -> Result<Portfolio> {
    let pb = output::spinner("Fetching positions");
    match bootstrap::with_timeout(timeout_secs, portfolio::load(contract, account)).await {
        Ok(portfolio) => {
            output::spinner_success(
                &pb,
                &format!("Fetched {} positions", portfolio.entries.len()),
            );
            Ok(portfolio)
        }
        Err(e) => {
            output::spinner_fail(&pb, "Fetching positions");
            error!(error = %e, %account, "Error fetching portfolio");
            Err(e.alert(PORTFOLIO_FAILED))
        }
    }
}

/// Execute `portfolio`.
pub async fn execute(args: &PortfolioArgs) -> Result<()> {
    let override_account = args.account.as_deref().map(parse_account).transpose()?;
    let config = session::load_config(&args.config.config)?;
    let session = session::connect(&config).await?;
    let account = match override_account {
        Some(account) => account,
        None => session.require_account()?,
    };
    let contract = session.betting()?;

    let portfolio = load_portfolio(contract.as_ref(), account, config.network.timeout_secs).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "portfolio",
            "account": portfolio.account,
            "total_ether": portfolio.total_ether(),
            "entries": portfolio.entries,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Portfolio");
    output::field("Account", portfolio.account);
    if portfolio.entries.is_empty() {
        output::note("No positions yet");
        return Ok(());
    }

    let table = Table::new(portfolio.entries.iter().map(PositionRow::from)).to_string();
    output::lines(&table);
    output::field("Total added", format!("{} ETH", amount(portfolio.total_ether())));
    Ok(())
}
