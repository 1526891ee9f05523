//! Core cache types and structures

use crate::config::{CacheConfig, DEFAULT_PURGE_THRESHOLD};
use crate::errors::Result;
use crate::identifier::{IdAllocator, Identifier};
use crate::purge::{create_purge_policy, CacheOccupancy, DeadCountPolicy, PurgePolicy};
use crate::statistics::CacheStatistics;
use opcache_core::{Constraints, Context, Generation, Metric, OperationBuffer, ReplayHandle};
use std::collections::HashMap;
use std::fmt;

/// Cache of replayable recorded operations.
///
/// Not internally synchronized. Every mutating method takes `&mut self`;
/// share a cache across threads by wrapping the whole value in a mutex.
pub struct OperationCache<Op> {
    /// Shared store all entries are recorded into
    pub(super) buffer: OperationBuffer<Op>,
    /// Identifier source, never reset
    pub(super) ids: IdAllocator,
    /// Live entries
    pub(super) index: HashMap<Identifier, ReplayHandle>,
    /// Entries deleted since the last reset
    pub(super) dead: usize,
    /// Entries recorded since the last reset
    pub(super) recorded: usize,
    /// Policy consulted by `purge_if_needed`
    pub(super) policy: Box<dyn PurgePolicy>,
    /// Statistics
    pub(super) stats: CacheStatistics,
}

impl<Op> OperationCache<Op> {
    /// Create an empty cache with the default configuration
    pub fn new() -> Self {
        Self::with_policy(Box::new(DeadCountPolicy::new(DEFAULT_PURGE_THRESHOLD)))
    }

    /// Create an empty cache from a validated configuration
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        let policy = create_purge_policy(&config.purge_policy)?;
        Ok(Self::with_parts(
            OperationBuffer::with_capacity(config.initial_capacity),
            policy,
        ))
    }

    /// Create an empty cache using a custom purge policy
    pub fn with_policy(policy: Box<dyn PurgePolicy>) -> Self {
        Self::with_parts(OperationBuffer::new(), policy)
    }

    fn with_parts(buffer: OperationBuffer<Op>, policy: Box<dyn PurgePolicy>) -> Self {
        Self {
            buffer,
            ids: IdAllocator::new(),
            index: HashMap::new(),
            dead: 0,
            recorded: 0,
            policy,
            stats: CacheStatistics::new(),
        }
    }

    /// Bundle layout inputs with capture access to the shared buffer.
    ///
    /// Sequences recorded through the context are not registered; keep the
    /// handle or record through `add` instead.
    pub fn context(&mut self, constraints: Constraints, metric: Metric) -> Context<'_, Op> {
        Context::new(constraints, metric, &mut self.buffer)
    }

    /// Number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Entries deleted since the buffer was last reset
    #[must_use]
    pub fn dead_count(&self) -> usize {
        self.dead
    }

    /// Live, dead and recorded counts as seen by purge policies
    #[must_use]
    pub fn occupancy(&self) -> CacheOccupancy {
        CacheOccupancy {
            live: self.index.len(),
            dead: self.dead,
            recorded: self.recorded,
        }
    }

    /// Current buffer generation; bumped by every reset
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.buffer.generation()
    }

    /// Entries held by the buffer, live or not
    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Most recently issued identifier
    #[must_use]
    pub fn last_id(&self) -> Identifier {
        self.ids.last()
    }

    #[must_use]
    pub fn statistics(&self) -> &CacheStatistics {
        &self.stats
    }

    /// Name of the configured purge policy
    #[must_use]
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }
}

impl<Op> Default for OperationCache<Op> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Op> fmt::Debug for OperationCache<Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationCache")
            .field("live", &self.index.len())
            .field("dead", &self.dead)
            .field("buffer_len", &self.buffer.len())
            .field("generation", &self.buffer.generation())
            .field("policy", &self.policy.name())
            .finish()
    }
}
