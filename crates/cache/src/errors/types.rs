//! Core error types for the cache

/// Result type for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Error type for cache operations
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Invalid or unparseable configuration
    #[error("configuration error: {message}")]
    Configuration {
        message: String,
        recovery_hint: RecoveryHint,
    },

    /// A replay handle could not be resolved against the buffer
    #[error("replay failed: {source}")]
    Replay {
        #[source]
        source: opcache_core::Error,
        recovery_hint: RecoveryHint,
    },
}

/// Recovery hints for error handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryHint {
    /// Fall back to the given default
    UseDefault { value: String },

    /// Record the entry again with `add`
    Regenerate,

    /// Clear the cache and record again
    Clear,
}

impl CacheError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>, recovery_hint: RecoveryHint) -> Self {
        Self::Configuration {
            message: message.into(),
            recovery_hint,
        }
    }
}
