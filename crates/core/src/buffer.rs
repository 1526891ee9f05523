//! Append-only operation storage shared by recording sessions
//!
//! Every session records into the same `OperationBuffer`. Nothing is ever
//! removed from the middle of the buffer; the only way to reclaim space is
//! `reset`, which drops everything and starts a new `Generation`. Handles
//! stamped with an older generation are rejected on replay.

use crate::errors::{Error, Result};
use crate::recording::{RecordingSession, ReplayHandle};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

/// Reset counter of an `OperationBuffer`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Process-unique identity of an `OperationBuffer`.
///
/// Stamped into every `ReplayHandle` so a handle cannot be replayed against
/// a buffer that did not issue it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BufferId(u64);

impl BufferId {
    fn allocate() -> Self {
        Self(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single slot in the buffer
#[derive(Debug, Clone)]
pub(crate) enum Entry<Op> {
    Op(Op),
    /// A previously recorded sequence spliced into a later capture
    Call(ReplayHandle),
}

/// Shared append-only store of recorded operations
pub struct OperationBuffer<Op> {
    entries: Vec<Entry<Op>>,
    id: BufferId,
    generation: Generation,
}

impl<Op> OperationBuffer<Op> {
    /// Create an empty buffer at generation 0
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty buffer with room for `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            id: BufferId::allocate(),
            generation: Generation::default(),
        }
    }

    /// Number of entries currently stored, including dead ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identity stamped into every handle this buffer issues
    #[must_use]
    pub const fn id(&self) -> BufferId {
        self.id
    }

    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Start capturing operations at the current end of the buffer
    pub fn begin_capture(&mut self) -> RecordingSession<'_, Op> {
        RecordingSession::new(self)
    }

    /// Drop all content and move to the next generation.
    ///
    /// Safe to call repeatedly; each call invalidates every handle issued so far.
    pub fn reset(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.generation = self.generation.next();
        trace!(dropped, generation = self.generation.get(), "buffer reset");
    }

    pub(crate) fn push(&mut self, entry: Entry<Op>) {
        self.entries.push(entry);
    }

    /// Check that `handle` can be replayed against this buffer
    pub fn validate(&self, handle: &ReplayHandle) -> Result<()> {
        if handle.buffer() != self.id {
            return Err(Error::foreign(handle.buffer(), self.id));
        }
        if handle.generation() != self.generation {
            return Err(Error::stale(handle.generation(), self.generation));
        }
        if handle.start() > handle.end() || handle.end() > self.entries.len() {
            return Err(Error::out_of_bounds(
                handle.start(),
                handle.end(),
                self.entries.len(),
            ));
        }
        Ok(())
    }

    /// Re-emit the sequence captured by `handle`, in recording order.
    ///
    /// Nested handles appended with `RecordingSession::call` are expanded in
    /// place. Returns the number of operations passed to `visitor`.
    pub fn replay<F>(&self, handle: &ReplayHandle, mut visitor: F) -> Result<usize>
    where
        F: FnMut(&Op),
    {
        self.validate(handle)?;
        Ok(self.replay_range(handle.start(), handle.end(), &mut visitor))
    }

    // Nested handles always end before the session that appended them
    // started, so expansion terminates. Pending ranges live on the heap so
    // nesting depth is not bounded by the call stack.
    fn replay_range(&self, start: usize, end: usize, visitor: &mut dyn FnMut(&Op)) -> usize {
        let mut visited = 0;
        let mut pending = vec![(start, end)];
        while let Some((mut cursor, end)) = pending.pop() {
            while cursor < end {
                let entry = &self.entries[cursor];
                cursor += 1;
                match entry {
                    Entry::Op(op) => {
                        visitor(op);
                        visited += 1;
                    }
                    Entry::Call(nested) => {
                        pending.push((cursor, end));
                        pending.push((nested.start(), nested.end()));
                        break;
                    }
                }
            }
        }
        visited
    }
}

impl<Op: Clone> OperationBuffer<Op> {
    /// Replay `handle` into an owned vector
    pub fn collect(&self, handle: &ReplayHandle) -> Result<Vec<Op>> {
        let mut ops = Vec::with_capacity(handle.len());
        self.replay(handle, |op| ops.push(op.clone()))?;
        Ok(ops)
    }
}

impl<Op> Default for OperationBuffer<Op> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Op> fmt::Debug for OperationBuffer<Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationBuffer")
            .field("len", &self.entries.len())
            .field("generation", &self.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(buffer: &mut OperationBuffer<u32>, ops: &[u32]) -> ReplayHandle {
        let mut session = buffer.begin_capture();
        for op in ops {
            session.emit(*op);
        }
        session.stop()
    }

    #[test]
    fn test_replay_in_order() {
        let mut buffer = OperationBuffer::new();
        let first = record(&mut buffer, &[1, 2, 3]);
        let second = record(&mut buffer, &[4, 5]);

        assert_eq!(buffer.collect(&first).unwrap(), vec![1, 2, 3]);
        assert_eq!(buffer.collect(&second).unwrap(), vec![4, 5]);
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn test_empty_capture() {
        let mut buffer: OperationBuffer<u32> = OperationBuffer::new();
        let handle = buffer.begin_capture().stop();

        assert!(handle.is_empty());
        assert_eq!(buffer.replay(&handle, |_| panic!("nothing recorded")), Ok(0));
    }

    #[test]
    fn test_reset_bumps_generation() {
        let mut buffer = OperationBuffer::new();
        let handle = record(&mut buffer, &[7]);
        assert_eq!(buffer.generation(), Generation::new(0));

        buffer.reset();
        buffer.reset();

        assert!(buffer.is_empty());
        assert_eq!(buffer.generation(), Generation::new(2));
        assert_eq!(
            buffer.collect(&handle),
            Err(Error::stale(Generation::new(0), Generation::new(2)))
        );
    }

    #[test]
    fn test_stale_handle_rejected_even_when_range_is_refilled() {
        let mut buffer = OperationBuffer::new();
        let old = record(&mut buffer, &[1, 2]);
        buffer.reset();
        let _new = record(&mut buffer, &[3, 4]);

        let err = buffer.collect(&old).unwrap_err();
        assert!(err.is_stale());
    }

    #[test]
    fn test_handle_from_smaller_buffer_rejected_as_foreign() {
        let mut big = OperationBuffer::new();
        let handle = record(&mut big, &[1, 2, 3, 4]);
        let small: OperationBuffer<u32> = OperationBuffer::new();

        assert_eq!(
            small.validate(&handle),
            Err(Error::foreign(big.id(), small.id()))
        );
    }

    #[test]
    fn test_handle_from_other_buffer_rejected_even_when_in_bounds() {
        let mut a = OperationBuffer::new();
        let from_a = record(&mut a, &[1, 2]);
        let mut b = OperationBuffer::new();
        let _from_b = record(&mut b, &[9, 9]);

        assert_ne!(a.id(), b.id());
        assert_eq!(from_a.generation(), b.generation());
        let err = b.collect(&from_a).unwrap_err();
        assert_eq!(err, Error::foreign(a.id(), b.id()));
        assert!(err.is_foreign());
        assert_eq!(a.collect(&from_a).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_buffer_id_survives_reset() {
        let mut buffer: OperationBuffer<u32> = OperationBuffer::new();
        let id = buffer.id();
        buffer.reset();
        assert_eq!(buffer.id(), id);
        assert_eq!(buffer.begin_capture().stop().buffer(), id);
    }

    #[test]
    fn test_deeply_nested_calls_replay_without_recursion() {
        const DEPTH: usize = 100_000;
        let mut buffer = OperationBuffer::new();
        let mut handle = record(&mut buffer, &[42]);
        for _ in 0..DEPTH {
            let mut session = buffer.begin_capture();
            session.call(&handle).unwrap();
            handle = session.stop();
        }

        let mut seen = Vec::new();
        assert_eq!(buffer.replay(&handle, |op| seen.push(*op)), Ok(1));
        assert_eq!(seen, vec![42]);
        assert_eq!(buffer.len(), DEPTH + 1);
    }

    #[test]
    fn test_nested_calls_interleave_with_trailing_ops() {
        let mut buffer = OperationBuffer::new();
        let leaf = record(&mut buffer, &[1]);

        let mut session = buffer.begin_capture();
        session.call(&leaf).unwrap();
        session.emit(2);
        let mid = session.stop();

        let mut session = buffer.begin_capture();
        session.emit(0);
        session.call(&mid).unwrap();
        session.call(&leaf).unwrap();
        session.emit(3);
        let top = session.stop();

        assert_eq!(buffer.collect(&top).unwrap(), vec![0, 1, 2, 1, 3]);
    }

    #[test]
    fn test_nested_calls_expand_in_place() {
        let mut buffer = OperationBuffer::new();
        let inner = record(&mut buffer, &[10, 11]);

        let mut session = buffer.begin_capture();
        session.emit(1);
        session.call(&inner).unwrap();
        session.emit(2);
        session.call(&inner).unwrap();
        let outer = session.stop();

        let mut session = buffer.begin_capture();
        session.call(&outer).unwrap();
        session.emit(3);
        let outermost = session.stop();

        assert_eq!(buffer.collect(&outer).unwrap(), vec![1, 10, 11, 2, 10, 11]);
        assert_eq!(
            buffer.collect(&outermost).unwrap(),
            vec![1, 10, 11, 2, 10, 11, 3]
        );
        assert_eq!(buffer.replay(&outermost, |_| {}), Ok(7));
    }

    #[test]
    fn test_debug_does_not_require_op_debug() {
        struct Opaque;
        let mut buffer = OperationBuffer::new();
        buffer.begin_capture().emit(Opaque);
        assert_eq!(
            format!("{buffer:?}"),
            "OperationBuffer { len: 1, generation: Generation(0) }"
        );
    }
}
