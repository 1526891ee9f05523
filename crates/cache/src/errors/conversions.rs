//! Error conversion utilities

use super::types::{CacheError, RecoveryHint};

impl From<opcache_core::Error> for CacheError {
    fn from(source: opcache_core::Error) -> Self {
        let recovery_hint = if source.is_stale() || source.is_foreign() {
            RecoveryHint::Regenerate
        } else {
            RecoveryHint::Clear
        };

        Self::Replay {
            source,
            recovery_hint,
        }
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(error: serde_json::Error) -> Self {
        Self::configuration(
            format!("invalid cache configuration: {error}"),
            RecoveryHint::UseDefault {
                value: "CacheConfig::default()".to_string(),
            },
        )
    }
}
