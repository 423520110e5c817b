//! Outbound adapters (driven side).

pub mod evm;
