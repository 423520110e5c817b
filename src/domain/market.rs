//! Binary prediction markets.
//!
//! - [`Side`] - One of the two mutually exclusive options of a market
//! - [`Market`] - Normalized snapshot of a market read from the contract
//! - [`MarketStatus`] - Open or resolved with a winning side
//! - [`BetMap`] - Markets keyed by id

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;
use super::fixed_point;
use super::id::BetId;
use super::price;
use super::record::BetRecord;

/// Built-in image used when a market has no image reference.
pub const PLACEHOLDER_IMAGE: &str = include_str!("../../assets/placeholder-image.txt");

/// Markets keyed by id, iterated in ascending id order.
pub type BetMap = BTreeMap<BetId, Market>;

/// One of the two options of a binary market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Option A (the "yes" side).
    A,
    /// Option B (the "no" side).
    B,
}

impl Side {
    /// Both sides, A first.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// Whether this is option A, as the contract's `isOptionA` flag.
    #[must_use]
    pub const fn is_option_a(self) -> bool {
        matches!(self, Self::A)
    }

    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Lifecycle state of a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "winner", rename_all = "lowercase")]
pub enum MarketStatus {
    Open,
    Resolved(Side),
}

/// A binary prediction market with stakes accumulated on each option.
///
/// Amounts and ratios are already normalized (divided by the contract's
/// fixed-point factor). The image is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Market {
    pub id: BetId,
    pub option_a: String,
    pub option_b: String,
    pub description: String,
    pub image: String,
    pub total_a: Decimal,
    pub total_b: Decimal,
    pub ratio_a: Decimal,
    pub ratio_b: Decimal,
    pub closed: bool,
    pub a_won: bool,
}

impl Market {
    /// Normalize a raw `bets(id)` record.
    ///
    /// Ratio and total fields are divided by the fixed-point factor; an empty
    /// image reference is replaced by [`PLACEHOLDER_IMAGE`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValueOutOfRange`] if a scaled field does not fit
    /// the decimal representation.
    pub fn from_raw(id: BetId, raw: BetRecord) -> Result<Self, DomainError> {
        let image = if raw.image_hash.trim().is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            raw.image_hash
        };

        Ok(Self {
            id,
            option_a: raw.option_a_title,
            option_b: raw.option_b_title,
            description: raw.description,
            image,
            total_a: fixed_point::normalize("currentTotalAAmount", raw.current_total_a_amount)?,
            total_b: fixed_point::normalize("currentTotalBAmount", raw.current_total_b_amount)?,
            ratio_a: fixed_point::normalize("currentARatio", raw.current_a_ratio)?,
            ratio_b: fixed_point::normalize("currentBRatio", raw.current_b_ratio)?,
            closed: raw.closed,
            a_won: raw.a_won,
        })
    }

    /// Title of the given option.
    #[must_use]
    pub fn title(&self, side: Side) -> &str {
        match side {
            Side::A => &self.option_a,
            Side::B => &self.option_b,
        }
    }

    /// Total staked on the given option.
    #[must_use]
    pub fn total(&self, side: Side) -> Decimal {
        match side {
            Side::A => self.total_a,
            Side::B => self.total_b,
        }
    }

    /// Total staked across both options.
    #[must_use]
    pub fn volume(&self) -> Decimal {
        self.total_a + self.total_b
    }

    /// Share of the volume staked on `side`, as a percentage.
    ///
    /// `None` while nothing has been staked.
    #[must_use]
    pub fn percentage(&self, side: Side) -> Option<Decimal> {
        price::side_percentage(self.total(side), self.total(side.opposite()))
    }

    /// Whether the market still accepts bets or has a winner.
    #[must_use]
    pub const fn status(&self) -> MarketStatus {
        if !self.closed {
            return MarketStatus::Open;
        }
        if self.a_won {
            MarketStatus::Resolved(Side::A)
        } else {
            MarketStatus::Resolved(Side::B)
        }
    }

    /// Whether the image is the built-in placeholder.
    #[must_use]
    pub fn has_placeholder_image(&self) -> bool {
        self.image == PLACEHOLDER_IMAGE
    }
}
