//! Identifier-keyed cache of recorded operation sequences
//!
//! `OperationCache` owns the shared `OperationBuffer`, hands out
//! identifiers for every recorded sequence, and tracks which of them are
//! still live. Deleting only marks waste; the buffer is reclaimed in one
//! go by `purge`, `purge_if_needed` or `clear`.

mod operations;
mod types;

// Re-export the main cache type
pub use types::OperationCache;

#[cfg(test)]
mod tests;
