//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.
//!
//! - [`session`] - Wallet session: account, loading flag, bound contracts
//! - [`catalog`] - Market aggregation over the betting contract
//! - [`position`] - User position aggregation
//! - [`listing`] - Market list filtering and sorting
//! - [`portfolio`] - Positions joined with their markets

pub mod catalog;
pub mod listing;
pub mod portfolio;
pub mod position;
pub mod session;

pub use session::{BoundContracts, Deployment, Session, SessionTargets};
