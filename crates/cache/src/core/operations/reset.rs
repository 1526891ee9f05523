//! Whole-buffer reclamation

use tracing::info;

use super::super::types::OperationCache;

impl<Op> OperationCache<Op> {
    /// Reset the cache if more than `threshold` entries are dead.
    ///
    /// A reset drops every entry, live ones included, because recorded
    /// operations cannot be cut out of the shared buffer. Identifiers keep
    /// increasing across resets. Returns true if the cache was reset.
    pub fn purge(&mut self, threshold: usize) -> bool {
        if self.dead <= threshold {
            return false;
        }
        self.reset("threshold");
        self.stats.record_purge();
        true
    }

    /// Reset the cache if the configured purge policy says so
    pub fn purge_if_needed(&mut self) -> bool {
        if !self.policy.should_purge(&self.occupancy()) {
            return false;
        }
        self.reset(self.policy.name());
        self.stats.record_purge();
        true
    }

    /// Drop every entry and reset the buffer unconditionally
    pub fn clear(&mut self) {
        self.reset("clear");
        self.stats.record_clear();
    }

    fn reset(&mut self, reason: &'static str) {
        let live = self.index.len();
        let dead = self.dead;

        self.index.clear();
        self.buffer.reset();
        self.dead = 0;
        self.recorded = 0;

        info!(
            reason,
            live,
            dead,
            generation = self.buffer.generation().get(),
            "operation buffer reset"
        );
    }
}
