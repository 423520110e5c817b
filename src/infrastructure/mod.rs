//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration loading, logging, and runtime wiring.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for session wiring
//! - [`config`] - Configuration loading and validation
//! - [`wallet`] - Wallet overview facade for the CLI

#[cfg(feature = "evm")]
pub mod bootstrap;
pub mod config;
pub mod wallet;
