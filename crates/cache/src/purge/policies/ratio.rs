//! Dead-entry ratio policy

use crate::purge::traits::{CacheOccupancy, PurgePolicy};

/// Purge once the dead share of everything recorded since the last reset
/// exceeds `ratio`, provided at least `min_dead` entries are dead.
///
/// Unlike an absolute count, this keeps large caches from being reset over
/// a handful of deletions, and `min_dead` keeps tiny caches from being
/// reset over a single one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadRatioPolicy {
    ratio: f64,
    min_dead: usize,
}

impl DeadRatioPolicy {
    /// `ratio` is expected in `(0.0, 1.0]`; `CacheConfig` validates it
    #[must_use]
    pub const fn new(ratio: f64, min_dead: usize) -> Self {
        Self { ratio, min_dead }
    }

    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    #[must_use]
    pub const fn min_dead(&self) -> usize {
        self.min_dead
    }
}

impl PurgePolicy for DeadRatioPolicy {
    fn should_purge(&self, occupancy: &CacheOccupancy) -> bool {
        if occupancy.recorded == 0 || occupancy.dead < self.min_dead {
            return false;
        }
        occupancy.dead as f64 / occupancy.recorded as f64 > self.ratio
    }

    fn name(&self) -> &'static str {
        "dead_ratio"
    }
}
