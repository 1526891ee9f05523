//! Cache of replayable recorded operations
//!
//! This crate keeps recorded operation sequences alive behind stable
//! identifiers so they can be replayed instead of recomputed:
//! - Monotonic, never reused identifiers
//! - Soft deletion with dead-entry accounting
//! - Whole-buffer reclamation driven by a threshold or a purge policy
//! - Generation-checked replay that rejects handles from before a reset
//!
//! Storage and recording live in `opcache-core`; the types needed to write
//! recording callbacks are re-exported here.

pub mod config;
pub mod core;
pub mod errors;
pub mod identifier;
pub mod purge;
pub mod statistics;

pub use config::{CacheConfig, CacheConfigBuilder, PurgePolicyConfig};
pub use self::core::OperationCache;
pub use errors::{CacheError, RecoveryHint, Result};
pub use identifier::{IdAllocator, Identifier};
pub use purge::{create_purge_policy, CacheOccupancy, DeadCountPolicy, DeadRatioPolicy, PurgePolicy};
pub use statistics::CacheStatistics;

pub use opcache_core::{
    Constraints, Context, Generation, Metric, OperationBuffer, RecordingSession, ReplayHandle,
    Size,
};
