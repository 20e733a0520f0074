//! Bounded LRU cache of query rankings.

use domfuzz_core::types::MatchResult;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// A ranking computed against one vocabulary generation.
#[derive(Debug, Clone)]
pub struct CachedRanking {
    pub generation: u64,
    pub results: Arc<[MatchResult]>,
}

/// Thread-safe LRU cache keyed by normalized input.
///
/// The lock guards only lookup, insertion, and eviction.
pub struct ResultCache {
    inner: Mutex<LruCache<String, CachedRanking>>,
    capacity: NonZeroUsize,
}

impl ResultCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            capacity,
        }
    }

    /// Looks up a ranking; a hit becomes the most recently used entry.
    pub fn get(&self, key: &str) -> Option<CachedRanking> {
        self.inner.lock().get(key).cloned()
    }

    /// Inserts or replaces a ranking, evicting the least recently used entry
    /// when full.
    pub fn put(&self, key: String, value: CachedRanking) {
        self.inner.lock().put(key, value);
    }

    /// Looks up a ranking only if it was computed for `generation`.
    ///
    /// An entry from another generation is dropped and reported as a miss.
    pub fn get_current(&self, key: &str, generation: u64) -> Option<Arc<[MatchResult]>> {
        let mut cache = self.inner.lock();
        match cache.get(key) {
            Some(entry) if entry.generation == generation => Some(Arc::clone(&entry.results)),
            Some(_) => {
                cache.pop(key);
                None
            }
            None => None,
        }
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }
}
