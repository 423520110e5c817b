//! Market identifier.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::DomainError;

/// Identifier of a market (a "bet") on the betting contract.
///
/// Ids form the contiguous range `1..=bet_count`; zero is never a valid id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BetId(u64);

impl BetId {
    /// Create a bet id, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBetId`] for `0`.
    pub const fn new(id: u64) -> Result<Self, DomainError> {
        if id == 0 {
            return Err(DomainError::InvalidBetId(id));
        }
        Ok(Self(id))
    }

    /// Get the raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Iterate over every id reported by a contract with `count` bets.
    pub fn range(count: u64) -> impl DoubleEndedIterator<Item = BetId> {
        (1..=count).map(Self)
    }
}

impl fmt::Display for BetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BetId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u64>()
            .map_err(|_| DomainError::ValueOutOfRange {
                field: "betId",
                value: s.to_string(),
            })?;
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(BetId::new(0), Err(DomainError::InvalidBetId(0)));
    }

    #[test]
    fn range_is_one_based_and_inclusive() {
        let ids: Vec<u64> = BetId::range(3).map(BetId::get).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn range_of_zero_is_empty() {
        assert_eq!(BetId::range(0).count(), 0);
    }

    #[test]
    fn parses_from_string() {
        let id: BetId = " 7 ".parse().unwrap();
        assert_eq!(id.get(), 7);
        assert!("abc".parse::<BetId>().is_err());
        assert!("0".parse::<BetId>().is_err());
    }
}
