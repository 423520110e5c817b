//! Table rows and labels shared by the market and portfolio views.

use rust_decimal::Decimal;
use tabled::Tabled;

use crate::adapter::inbound::cli::output::{self, Tone};
use crate::application::listing::MarketSummary;
use crate::application::portfolio::PortfolioEntry;
use crate::domain::price::format_percentage;
use crate::domain::{MarketStatus, Side};

const QUESTION_WIDTH: usize = 48;

/// Shorten `text` to `max` characters, ending with an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Human label for a market's lifecycle state.
pub fn status_label(status: MarketStatus, option_a: &str, option_b: &str) -> String {
    match status {
        MarketStatus::Open => "open".to_string(),
        MarketStatus::Resolved(Side::A) => format!("resolved: {option_a}"),
        MarketStatus::Resolved(Side::B) => format!("resolved: {option_b}"),
    }
}

/// Amount with trailing zeros removed.
pub fn amount(value: Decimal) -> String {
    value.normalize().to_string()
}

#[derive(Tabled)]
pub struct MarketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Question")]
    question: String,
    #[tabled(rename = "Yes")]
    yes: String,
    #[tabled(rename = "No")]
    no: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&MarketSummary> for MarketRow {
    fn from(summary: &MarketSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            question: truncate(&summary.question, QUESTION_WIDTH),
            yes: format!(
                "{} {}",
                summary.option_a,
                format_percentage(summary.yes_percentage)
            ),
            no: format!(
                "{} {}",
                summary.option_b,
                format_percentage(summary.no_percentage)
            ),
            volume: amount(summary.total_amount),
            status: status_label(summary.status, &summary.option_a, &summary.option_b),
        }
    }
}

#[derive(Tabled)]
pub struct PositionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Question")]
    question: String,
    #[tabled(rename = "Position")]
    chosen: String,
    #[tabled(rename = "Amount (ETH)")]
    amount: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Avg price")]
    average: String,
    #[tabled(rename = "Result")]
    result: String,
}

impl From<&PortfolioEntry> for PositionRow {
    fn from(entry: &PortfolioEntry) -> Self {
        let result = match entry.won() {
            None => output::toned("open", Tone::Muted),
            Some(true) => output::toned("won", Tone::Good),
            Some(false) => output::toned("lost", Tone::Bad),
        };
        Self {
            id: entry.bet_id.to_string(),
            question: truncate(&entry.question, QUESTION_WIDTH),
            chosen: entry.chosen.clone(),
            amount: amount(entry.amount_ether),
            current: format_percentage(entry.current_price),
            average: format_percentage(Some(entry.average_price)),
            result,
        }
    }
}
