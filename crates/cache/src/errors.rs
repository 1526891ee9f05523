//! Error handling for the operation cache
//!
//! Lookups, deletes and purges never fail; they report through `Option`
//! and `bool`. Errors only arise from configuration and from replaying a
//! handle the buffer no longer recognises.

mod conversions;
mod recovery;
mod types;

pub use types::*;
