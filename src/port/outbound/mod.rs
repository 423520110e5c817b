//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod betting;
pub mod token;
pub mod wallet;
