//! Recording new entries

use opcache_core::{RecordingSession, ReplayHandle};
use std::convert::Infallible;
use tracing::debug;

use super::super::types::OperationCache;
use crate::identifier::Identifier;

impl<Op> OperationCache<Op> {
    /// Record a new entry.
    ///
    /// `produce` runs exactly once, synchronously, and emits the entry's
    /// operations into the session. The returned handle can be replayed
    /// right away; the identifier looks it up later. A panic in `produce`
    /// propagates to the caller and leaves the pending entry unregistered.
    pub fn add<F>(&mut self, produce: F) -> (ReplayHandle, Identifier)
    where
        F: FnOnce(&mut RecordingSession<'_, Op>),
    {
        let recorded = self.try_add(|session| {
            produce(session);
            Ok::<(), Infallible>(())
        });
        match recorded {
            Ok(entry) => entry,
            Err(never) => match never {},
        }
    }

    /// Record a new entry with a fallible callback.
    ///
    /// If `produce` fails its error is returned unchanged. The identifier
    /// allocated for the attempt is not reissued, and whatever was emitted
    /// before the failure stays in the buffer, counted as one dead entry so
    /// purge policies see the waste.
    pub fn try_add<F, E>(&mut self, produce: F) -> Result<(ReplayHandle, Identifier), E>
    where
        F: FnOnce(&mut RecordingSession<'_, Op>) -> Result<(), E>,
    {
        let id = self.ids.allocate();
        let mut session = self.buffer.begin_capture();

        if let Err(err) = produce(&mut session) {
            debug!(
                id = id.get(),
                abandoned = session.len(),
                "recording callback failed; entry not registered"
            );
            self.recorded += 1;
            self.dead += 1;
            return Err(err);
        }

        let handle = session.stop();
        self.index.insert(id, handle);
        self.recorded += 1;
        self.stats.record_add();

        debug!(
            id = id.get(),
            entries = handle.len(),
            generation = handle.generation().get(),
            "recorded operation sequence"
        );

        Ok((handle, id))
    }
}
