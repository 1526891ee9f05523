//! Cache statistics tracking and reporting

use serde::{Deserialize, Serialize};

/// Counters for cache operations.
///
/// Counted over the lifetime of the cache; resets of the buffer do not
/// clear them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStatistics {
    pub adds: u64,
    pub hits: u64,
    pub misses: u64,
    pub deletes: u64,
    pub purges: u64,
    pub clears: u64,
}

impl CacheStatistics {
    /// Create new statistics instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_add(&mut self) {
        self.adds += 1;
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Record a delete that removed a live entry
    pub fn record_delete(&mut self) {
        self.deletes += 1;
    }

    /// Record a purge that reset the buffer
    pub fn record_purge(&mut self) {
        self.purges += 1;
    }

    pub fn record_clear(&mut self) {
        self.clears += 1;
    }

    /// Calculate hit rate as a percentage
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }

    /// Buffer resets of either kind
    pub fn resets(&self) -> u64 {
        self.purges + self.clears
    }
}
