//! Recording sessions and the handles they produce

use crate::buffer::{BufferId, Entry, Generation, OperationBuffer};
use crate::errors::{Error, Result};

/// Opaque reference to a captured operation sequence.
///
/// A handle is only meaningful for the buffer that issued it, and only
/// until that buffer is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplayHandle {
    buffer: BufferId,
    generation: Generation,
    start: usize,
    end: usize,
}

impl ReplayHandle {
    pub(crate) const fn new(
        buffer: BufferId,
        generation: Generation,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            buffer,
            generation,
            start,
            end,
        }
    }

    /// Buffer that issued the handle
    #[must_use]
    pub const fn buffer(&self) -> BufferId {
        self.buffer
    }

    /// Generation of the buffer at the time the handle was issued
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of top-level entries covered, counting a nested call as one
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An in-progress capture into an `OperationBuffer`.
///
/// Operations emitted here land at the end of the shared buffer. `stop`
/// turns the session into a `ReplayHandle` covering everything emitted
/// since the session began. Dropping a session without stopping it leaves
/// its operations in the buffer with nothing referencing them.
pub struct RecordingSession<'a, Op> {
    buffer: &'a mut OperationBuffer<Op>,
    start: usize,
}

impl<'a, Op> RecordingSession<'a, Op> {
    pub(crate) fn new(buffer: &'a mut OperationBuffer<Op>) -> Self {
        let start = buffer.len();
        Self { buffer, start }
    }

    /// Append one operation to the capture
    pub fn emit(&mut self, op: Op) {
        self.buffer.push(Entry::Op(op));
    }

    /// Append a previously recorded sequence to the capture.
    ///
    /// The handle must come from this buffer, belong to the current
    /// generation, and have been stopped before this session began.
    pub fn call(&mut self, handle: &ReplayHandle) -> Result<()> {
        self.buffer.validate(handle)?;
        if handle.end() > self.start {
            return Err(Error::out_of_bounds(handle.start(), handle.end(), self.start));
        }
        self.buffer.push(Entry::Call(*handle));
        Ok(())
    }

    /// Number of entries captured so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len() - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.buffer.generation()
    }

    /// Finish the capture
    #[must_use]
    pub fn stop(self) -> ReplayHandle {
        ReplayHandle::new(
            self.buffer.id(),
            self.buffer.generation(),
            self.start,
            self.buffer.len(),
        )
    }
}

impl<Op> Extend<Op> for RecordingSession<'_, Op> {
    fn extend<I: IntoIterator<Item = Op>>(&mut self, iter: I) {
        for op in iter {
            self.emit(op);
        }
    }
}
