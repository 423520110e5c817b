//! Display price math.

use rust_decimal::Decimal;

/// Share of the total staked on one side, as a percentage.
///
/// Computes `side / (side + other) * 100`. Returns `None` when nothing has
/// been staked on either side, which is the state of every new market.
#[must_use]
pub fn side_percentage(side_total: Decimal, other_total: Decimal) -> Option<Decimal> {
    let total = side_total + other_total;
    if total.is_zero() {
        return None;
    }
    Some((side_total / total * Decimal::ONE_HUNDRED).normalize())
}

/// Express a normalized ratio (e.g. `0.4`) as a percentage (`40`).
#[must_use]
pub fn ratio_percentage(ratio: Decimal) -> Decimal {
    (ratio * Decimal::ONE_HUNDRED).normalize()
}

/// Render an optional percentage, using an em dash when undefined.
#[must_use]
pub fn format_percentage(value: Option<Decimal>) -> String {
    match value {
        Some(pct) => format!("{}%", pct.round_dp(2).normalize()),
        None => "—".to_string(),
    }
}
