//! Lookup and soft deletion

use opcache_core::ReplayHandle;
use tracing::trace;

use super::super::types::OperationCache;
use crate::identifier::Identifier;

impl<Op> OperationCache<Op> {
    /// Look up a live entry.
    ///
    /// Returns `None` if `id` was never issued, was deleted, or was dropped
    /// by a purge or clear. The handle stays valid until the next reset.
    pub fn get(&mut self, id: Identifier) -> Option<ReplayHandle> {
        let found = self.index.get(&id).copied();
        match found {
            Some(_) => {
                self.stats.record_hit();
                trace!(id = id.get(), "cache hit");
            }
            None => {
                self.stats.record_miss();
                trace!(id = id.get(), "cache miss");
            }
        }
        found
    }

    /// Look up a live entry without touching statistics
    #[must_use]
    pub fn peek(&self, id: Identifier) -> Option<ReplayHandle> {
        self.index.get(&id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: Identifier) -> bool {
        self.index.contains_key(&id)
    }

    /// Mark an entry dead.
    ///
    /// Its operations stay in the buffer until the next reset. Deleting an
    /// absent or invalid identifier does nothing.
    pub fn delete(&mut self, id: Identifier) {
        if self.index.remove(&id).is_some() {
            self.dead += 1;
            self.stats.record_delete();
            trace!(id = id.get(), dead = self.dead, "entry marked dead");
        }
    }
}
