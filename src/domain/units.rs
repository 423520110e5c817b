//! Native currency denomination helpers.

use rust_decimal::Decimal;

/// Decimal places of the chain's native currency (wei per ether = 10^18).
pub const ETHER_DECIMALS: u32 = 18;

/// Convert an amount denominated in wei to ether.
///
/// Amounts too small to survive the 28-digit decimal precision round to zero.
#[must_use]
pub fn wei_to_ether(wei: Decimal) -> Decimal {
    let ether = wei / Decimal::from(10u64.pow(ETHER_DECIMALS));
    ether.normalize()
}
