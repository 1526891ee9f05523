use crate::buffer::{BufferId, Generation};

/// Result type alias for replay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a replay handle cannot be resolved against a buffer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The handle was issued by a different buffer
    #[error("replay handle from buffer {handle} used against buffer {current}")]
    ForeignHandle { handle: BufferId, current: BufferId },

    /// The buffer was reset after the handle was issued
    #[error("replay handle from generation {handle} used after reset (buffer is at generation {current})")]
    StaleHandle {
        handle: Generation,
        current: Generation,
    },

    /// The handle's range does not lie inside the buffer
    #[error("replay handle range {start}..{end} is outside the buffer (len {len})")]
    HandleOutOfBounds { start: usize, end: usize, len: usize },
}

impl Error {
    /// Create a foreign handle error
    #[must_use]
    pub const fn foreign(handle: BufferId, current: BufferId) -> Self {
        Self::ForeignHandle { handle, current }
    }

    /// Create a stale handle error
    #[must_use]
    pub const fn stale(handle: Generation, current: Generation) -> Self {
        Self::StaleHandle { handle, current }
    }

    /// Create an out of bounds error
    #[must_use]
    pub const fn out_of_bounds(start: usize, end: usize, len: usize) -> Self {
        Self::HandleOutOfBounds { start, end, len }
    }

    /// Check whether the error was caused by a buffer reset
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        matches!(self, Self::StaleHandle { .. })
    }

    /// Check whether the handle came from another buffer
    #[must_use]
    pub const fn is_foreign(&self) -> bool {
        matches!(self, Self::ForeignHandle { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::stale(Generation::new(1), Generation::new(3));
        assert_eq!(
            err.to_string(),
            "replay handle from generation 1 used after reset (buffer is at generation 3)"
        );
        assert!(err.is_stale());

        let err = Error::out_of_bounds(4, 9, 6);
        assert_eq!(
            err.to_string(),
            "replay handle range 4..9 is outside the buffer (len 6)"
        );
        assert!(!err.is_stale());
    }

    #[test]
    fn test_foreign_error_display() {
        let a = crate::OperationBuffer::<u8>::new().id();
        let b = crate::OperationBuffer::<u8>::new().id();
        let err = Error::foreign(a, b);
        assert_eq!(
            err.to_string(),
            format!("replay handle from buffer {a} used against buffer {b}")
        );
        assert!(err.is_foreign());
        assert!(!err.is_stale());
    }
}
