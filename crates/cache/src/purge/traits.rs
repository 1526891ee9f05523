//! Core purge policy trait definition

/// Entry counts a policy decides on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheOccupancy {
    /// Entries reachable through the index
    pub live: usize,
    /// Entries deleted since the last reset whose operations are still buffered
    pub dead: usize,
    /// Entries recorded since the last reset
    pub recorded: usize,
}

/// Purge policy trait
pub trait PurgePolicy: Send + Sync {
    /// Decide whether the cache should be reset now
    fn should_purge(&self, occupancy: &CacheOccupancy) -> bool;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
