//! Aggregation fetch settings.

use serde::Deserialize;

/// Controls how market reads are scheduled.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Maximum `bets(id)` reads in flight. `1` reads strictly one id at a
    /// time in increasing order.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

const fn default_concurrency() -> usize {
    1
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}
