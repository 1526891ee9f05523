//! Absolute dead-entry count policy

use crate::purge::traits::{CacheOccupancy, PurgePolicy};

/// Purge once more than `threshold` entries are dead.
///
/// Same trigger as `OperationCache::purge(threshold)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadCountPolicy {
    threshold: usize,
}

impl DeadCountPolicy {
    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }
}

impl PurgePolicy for DeadCountPolicy {
    fn should_purge(&self, occupancy: &CacheOccupancy) -> bool {
        occupancy.dead > self.threshold
    }

    fn name(&self) -> &'static str {
        "dead_count"
    }
}
