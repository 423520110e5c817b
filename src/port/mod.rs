//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!                ┌─────────────────────────┐
//!                │      Application        │
//!                │  session · catalog ·    │
//!                │  position · portfolio   │
//!                └───────────┬─────────────┘
//!                            │
//!          ┌─────────────────┼──────────────────┐
//!          ▼                 ▼                  ▼
//!   ┌─────────────┐   ┌──────────────┐   ┌─────────────┐
//!   │   Wallet    │   │   Betting    │   │    Token    │
//!   │  Provider   │   │   Contract   │   │  Contract   │
//!   └─────────────┘   └──────────────┘   └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::wallet::WalletProvider`] - Account access and contract binding
//! - [`outbound::betting::BettingContract`] - Market and position reads
//! - [`outbound::token::TokenContract`] - Stake token balance reads

pub mod outbound;
