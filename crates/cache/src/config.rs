//! Cache configuration with validation
use crate::errors::{CacheError, RecoveryHint, Result};
use serde::{Deserialize, Serialize};

/// Dead entries tolerated by the default policy before a reset
pub const DEFAULT_PURGE_THRESHOLD: usize = 64;

/// Dead share that triggers a reset when the ratio policy is picked by name
pub const DEFAULT_PURGE_RATIO: f64 = 0.5;

/// Which purge policy `OperationCache::purge_if_needed` consults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PurgePolicyConfig {
    /// Reset once more than `threshold` entries are dead
    DeadCount { threshold: usize },
    /// Reset once dead entries exceed `ratio` of recorded ones
    DeadRatio {
        ratio: f64,
        #[serde(default)]
        min_dead: usize,
    },
}

impl Default for PurgePolicyConfig {
    fn default() -> Self {
        Self::DeadCount {
            threshold: DEFAULT_PURGE_THRESHOLD,
        }
    }
}

impl PurgePolicyConfig {
    /// Default parameters for a policy given by name (`count` or `ratio`)
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "count" | "dead_count" => Ok(Self::default()),
            "ratio" | "dead_ratio" => Ok(Self::DeadRatio {
                ratio: DEFAULT_PURGE_RATIO,
                min_dead: 1,
            }),
            _ => Err(CacheError::configuration(
                format!("Unknown purge policy: {name}"),
                RecoveryHint::UseDefault {
                    value: "count".to_string(),
                },
            )),
        }
    }

    /// Check policy parameters
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::DeadCount { .. } => Ok(()),
            Self::DeadRatio { ratio, .. } if ratio > 0.0 && ratio <= 1.0 => Ok(()),
            Self::DeadRatio { ratio, .. } => Err(CacheError::configuration(
                format!("purge ratio must be in (0.0, 1.0], got {ratio}"),
                RecoveryHint::UseDefault {
                    value: DEFAULT_PURGE_RATIO.to_string(),
                },
            )),
        }
    }
}

/// Configuration for an `OperationCache`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Policy used by `purge_if_needed`
    pub purge_policy: PurgePolicyConfig,
    /// Entries to reserve in the operation buffer up front
    pub initial_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            purge_policy: PurgePolicyConfig::default(),
            initial_capacity: 0,
        }
    }
}

impl CacheConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.purge_policy.validate()
    }
}

/// Builder for creating cache configurations
pub struct CacheConfigBuilder {
    config: CacheConfig,
}

impl CacheConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: CacheConfig::default(),
        }
    }

    /// Set the purge policy
    pub fn with_purge_policy(mut self, policy: PurgePolicyConfig) -> Self {
        self.config.purge_policy = policy;
        self
    }

    /// Purge once more than `threshold` entries are dead
    pub fn with_dead_count_threshold(self, threshold: usize) -> Self {
        self.with_purge_policy(PurgePolicyConfig::DeadCount { threshold })
    }

    /// Purge once the dead share exceeds `ratio`
    pub fn with_dead_ratio(self, ratio: f64, min_dead: usize) -> Self {
        self.with_purge_policy(PurgePolicyConfig::DeadRatio { ratio, min_dead })
    }

    /// Set the initial buffer capacity
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<CacheConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for CacheConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
