//! Domain validation errors.
//!
//! Returned when a raw contract value cannot be represented in the domain
//! types, or when a lookup names a market the contract does not know.

use thiserror::Error;

use super::id::BetId;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A scaled on-chain integer does not fit the decimal representation.
    #[error("{field} value {value} is out of range")]
    ValueOutOfRange {
        /// Contract field that carried the value.
        field: &'static str,
        /// The raw value, rendered in decimal.
        value: String,
    },

    /// The requested market is outside `1..=bet_count`.
    #[error("bet {id} does not exist (contract reports {count} bets)")]
    UnknownBet {
        /// The requested identifier.
        id: BetId,
        /// Bet count reported by the contract.
        count: u64,
    },

    /// Bet identifiers start at 1.
    #[error("invalid bet id {0}: ids start at 1")]
    InvalidBetId(u64),
}
