//! Exchange-agnostic domain logic for binary prediction markets.

pub mod error;
pub mod fixed_point;
pub mod price;
pub mod units;

mod id;
mod market;
mod position;
mod record;

pub use error::DomainError;
pub use id::BetId;
pub use market::{BetMap, Market, MarketStatus, Side, PLACEHOLDER_IMAGE};
pub use position::{Positions, UserBet};
pub use record::{BetRecord, UserBetRecord};
