//! Recovery utilities for cache errors

use super::types::{CacheError, RecoveryHint};

impl CacheError {
    /// Get the recovery hint for this error
    #[must_use]
    pub const fn recovery_hint(&self) -> &RecoveryHint {
        match self {
            Self::Configuration { recovery_hint, .. } | Self::Replay { recovery_hint, .. } => {
                recovery_hint
            }
        }
    }

    /// Check if the error came from replaying a handle issued before a reset
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        matches!(self, Self::Replay { source, .. } if source.is_stale())
    }

    /// Check if the error came from replaying another cache's handle
    #[must_use]
    pub const fn is_foreign(&self) -> bool {
        matches!(self, Self::Replay { source, .. } if source.is_foreign())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opcache_core::{Error, Generation};

    #[test]
    fn test_stale_replay_suggests_regenerate() {
        let err = CacheError::from(Error::stale(Generation::new(0), Generation::new(1)));
        assert!(err.is_stale());
        assert_eq!(err.recovery_hint(), &RecoveryHint::Regenerate);
        assert_eq!(
            err.to_string(),
            "replay failed: replay handle from generation 0 used after reset (buffer is at generation 1)"
        );
    }

    #[test]
    fn test_out_of_bounds_suggests_clear() {
        let err = CacheError::from(Error::out_of_bounds(0, 8, 2));
        assert!(!err.is_stale());
        assert_eq!(err.recovery_hint(), &RecoveryHint::Clear);
    }

    #[test]
    fn test_foreign_handle_suggests_regenerate() {
        let a = opcache_core::OperationBuffer::<u8>::new().id();
        let b = opcache_core::OperationBuffer::<u8>::new().id();
        let err = CacheError::from(Error::foreign(a, b));
        assert!(err.is_foreign());
        assert!(!err.is_stale());
        assert_eq!(err.recovery_hint(), &RecoveryHint::Regenerate);
    }

    #[test]
    fn test_configuration_error() {
        let err = CacheError::configuration("bad ratio", RecoveryHint::Regenerate);
        assert_eq!(err.to_string(), "configuration error: bad ratio");
        assert!(!err.is_stale());
    }
}
