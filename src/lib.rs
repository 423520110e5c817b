//! Betboard - a read-only client for binary prediction-market contracts.
//!
//! Connects to a wallet over JSON-RPC, reads every market from a betting
//! contract and the connected account's positions, and renders them as a
//! market list and a portfolio.
//!
//! # Architecture
//!
//! - **`domain`** - Markets, positions, fixed-point normalization, price math
//! - **`port`** - Traits for the wallet provider and the contracts
//! - **`application`** - Session lifecycle, market and position aggregation,
//!   list and portfolio view models
//! - **`adapter`** - `alloy` contract bindings and the CLI (requires `evm`)
//! - **`infrastructure`** - Configuration, logging and session bootstrap
//!
//! # Features
//!
//! - `evm` (default) - JSON-RPC wallet, contract bindings and the binary
//!
//! # Example
//!
//! ```
//! use betboard::domain::BetId;
//!
//! assert_eq!(BetId::range(3).map(BetId::get).collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(feature = "evm")]
pub mod adapter;
