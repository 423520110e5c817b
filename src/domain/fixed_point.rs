//! Fixed-point conversion for contract values.
//!
//! The betting contract stores ratios and amounts as integers scaled by
//! [`FACTOR`]. Normalization is an exact decimal shift, so `500` becomes
//! `5.00` and `40` becomes `0.40` with no binary floating point involved.

use alloy_primitives::U256;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::error::DomainError;

/// Integer scale used by the contract for ratios and amounts.
pub const FACTOR: u64 = 100;

/// Decimal places implied by [`FACTOR`].
const SCALE: u32 = 2;

/// Convert a scaled on-chain integer into its decimal value (`raw / 100`).
///
/// # Errors
///
/// Returns [`DomainError::ValueOutOfRange`] when `raw` exceeds the 96-bit
/// mantissa of [`Decimal`].
pub fn normalize(field: &'static str, raw: U256) -> Result<Decimal, DomainError> {
    to_decimal(field, raw, SCALE)
}

/// Read an unsigned integer as a decimal with `scale` implied places, so
/// `to_decimal(_, 1_500_000, 6)` is `1.5`. Trailing zeros are kept.
///
/// # Errors
///
/// Returns [`DomainError::ValueOutOfRange`] when `raw` exceeds the 96-bit
/// mantissa of [`Decimal`] or `scale` exceeds 28.
pub fn to_decimal(field: &'static str, raw: U256, scale: u32) -> Result<Decimal, DomainError> {
    let out_of_range = || DomainError::ValueOutOfRange {
        field,
        value: raw.to_string(),
    };

    let value = u128::try_from(raw).map_err(|_| out_of_range())?;
    let value = i128::try_from(value).map_err(|_| out_of_range())?;
    Decimal::try_from_i128_with_scale(value, scale).map_err(|_| out_of_range())
}

/// Scale a decimal back to the contract representation, truncating any
/// precision beyond two decimal places. Negative values have no on-chain
/// representation and yield `None`.
#[must_use]
pub fn to_raw(value: Decimal) -> Option<U256> {
    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }
    let scaled = value.checked_mul(Decimal::from(FACTOR))?.trunc();
    scaled.to_u128().map(U256::from)
}

/// Parse an integer identifier field without scaling.
///
/// # Errors
///
/// Returns [`DomainError::ValueOutOfRange`] when `raw` does not fit in `u64`.
pub fn integer(field: &'static str, raw: U256) -> Result<u64, DomainError> {
    u64::try_from(raw).map_err(|_| DomainError::ValueOutOfRange {
        field,
        value: raw.to_string(),
    })
}
