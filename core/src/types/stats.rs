use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Point-in-time copy of an engine's counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_domains: usize,
    /// Rankings currently held by the result cache.
    pub cached_queries: usize,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub total_queries: u64,
    pub cumulative_response_time: Duration,
    /// `cumulative_response_time / total_queries`, zero before the first query.
    pub average_response_time: Duration,
}

impl Statistics {
    /// Fraction of queries served from the cache, zero before the first query.
    pub fn hit_rate(&self) -> f64 {
        if self.total_queries == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.total_queries as f64
        }
    }
}
