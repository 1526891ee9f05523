//! Purge policies for whole-buffer reclamation
//!
//! Recorded operations cannot be cut out of the shared buffer, so the only
//! reclamation is a full reset. A policy decides when the waste left by
//! deleted entries justifies throwing away every live entry too.

mod factory;
mod policies;
mod traits;

// Re-export public API
pub use factory::create_purge_policy;
pub use policies::{DeadCountPolicy, DeadRatioPolicy};
pub use traits::{CacheOccupancy, PurgePolicy};
