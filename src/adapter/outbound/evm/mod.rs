//! EVM JSON-RPC integration.
//!
//! Implements the wallet, betting and token ports over an HTTP RPC endpoint
//! with `alloy`.

pub mod abi;
pub mod betting;
pub mod token;
pub mod wallet;

pub use betting::EvmBettingContract;
pub use token::EvmTokenContract;
pub use wallet::EvmWallet;
