//! Recording primitives for `opcache`.
//!
//! This crate owns the storage side of the cache: an append-only buffer of
//! operations, the sessions that write into it, and the handles that replay
//! what a session captured.
//!
//! ## Key Components
//!
//! - **`buffer`**: `OperationBuffer`, the shared backing store. Resetting it
//!   bumps its `Generation`, which invalidates every handle issued before.
//! - **`recording`**: `RecordingSession` (the capture target handed to
//!   recording callbacks) and `ReplayHandle`.
//! - **`types`**: layout plumbing (`Constraints`, `Size`, `Metric`) bundled
//!   into a `Context` for callers that record layout-dependent output.
//! - **`errors`**: the `Error` enum and `Result` alias for replay failures.

pub mod buffer;
pub mod errors;
pub mod recording;
pub mod types;

pub use self::{
    buffer::{BufferId, Generation, OperationBuffer},
    errors::{Error, Result},
    recording::{RecordingSession, ReplayHandle},
    types::{Constraints, Context, Metric, Size},
};
