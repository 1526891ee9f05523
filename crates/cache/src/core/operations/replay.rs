//! Replaying cached entries

use opcache_core::ReplayHandle;
use tracing::warn;

use super::super::types::OperationCache;
use crate::errors::Result;
use crate::identifier::Identifier;

impl<Op> OperationCache<Op> {
    /// Replay the live entry `id` into `visitor`.
    ///
    /// Returns `Ok(None)` if the entry is not live, otherwise the number of
    /// operations replayed.
    pub fn replay<F>(&self, id: Identifier, visitor: F) -> Result<Option<usize>>
    where
        F: FnMut(&Op),
    {
        match self.index.get(&id) {
            Some(handle) => self.replay_handle(handle, visitor).map(Some),
            None => Ok(None),
        }
    }

    /// Replay a handle obtained from `add` or `get`.
    ///
    /// Fails with a stale-handle error if the cache was reset since the
    /// handle was issued, and with a foreign-handle error if another cache
    /// issued it.
    pub fn replay_handle<F>(&self, handle: &ReplayHandle, visitor: F) -> Result<usize>
    where
        F: FnMut(&Op),
    {
        self.buffer.replay(handle, visitor).map_err(|error| {
            if error.is_stale() {
                warn!(
                    handle_generation = handle.generation().get(),
                    generation = self.buffer.generation().get(),
                    "replay of handle issued before a reset"
                );
            } else if error.is_foreign() {
                warn!(
                    handle_buffer = handle.buffer().get(),
                    buffer = self.buffer.id().get(),
                    "replay of handle issued by another cache"
                );
            }
            error.into()
        })
    }
}
