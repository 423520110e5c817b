//! Infrastructure configuration modules.

pub mod fetch;
pub mod logging;
pub mod network;
pub mod settings;
pub mod wallet;
