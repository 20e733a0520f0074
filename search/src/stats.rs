//! Lock-free query counters.

use domfuzz_core::types::Statistics;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Per-engine counters. Updates are single atomic adds, so recording never
/// serializes scoring.
#[derive(Debug, Default)]
pub(crate) struct StatsRecorder {
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    total_queries: AtomicU64,
    response_nanos: AtomicU64,
}

impl StatsRecorder {
    pub(crate) fn record_hit(&self, elapsed: Duration) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
        self.record_query(elapsed);
    }

    pub(crate) fn record_miss(&self, elapsed: Duration) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
        self.record_query(elapsed);
    }

    fn record_query(&self, elapsed: Duration) {
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.response_nanos.fetch_add(nanos, Ordering::Relaxed);
        self.total_queries.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, total_domains: usize, cached_queries: usize) -> Statistics {
        let total_queries = self.total_queries.load(Ordering::Relaxed);
        let nanos = self.response_nanos.load(Ordering::Relaxed);
        let average = if total_queries == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(nanos / total_queries)
        };

        Statistics {
            total_domains,
            cached_queries,
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            total_queries,
            cumulative_response_time: Duration::from_nanos(nanos),
            average_response_time: average,
        }
    }

    pub(crate) fn reset(&self) {
        self.cache_hits.store(0, Ordering::Relaxed);
        self.cache_misses.store(0, Ordering::Relaxed);
        self.total_queries.store(0, Ordering::Relaxed);
        self.response_nanos.store(0, Ordering::Relaxed);
    }
}
