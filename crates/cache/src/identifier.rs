//! Cache entry identifiers and their allocator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a recorded entry within one `OperationCache`.
///
/// The zero value is the "never assigned" placeholder; it is also what
/// `Identifier::default()` returns. A valid identifier says nothing about
/// whether the entry is still live.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Identifier(u64);

impl Identifier {
    /// The unassigned placeholder
    pub const INVALID: Self = Self(0);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns true if the identifier was ever handed out by an allocator
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic identifier source.
///
/// Never rewinds: purging or clearing a cache keeps the allocator, so
/// identifiers from different buffer generations cannot collide.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Hand out the next identifier
    pub fn allocate(&mut self) -> Identifier {
        self.last += 1;
        Identifier(self.last)
    }

    /// Most recently allocated identifier, or `Identifier::INVALID` if none
    #[must_use]
    pub const fn last(&self) -> Identifier {
        Identifier(self.last)
    }
}
