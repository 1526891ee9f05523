//! Layout plumbing handed to recording callbacks
//!
//! None of these types influence caching. They exist so a caller can bundle
//! the layout inputs it recorded against together with the shared buffer.

use crate::buffer::{Generation, OperationBuffer};
use crate::recording::RecordingSession;
use serde::{Deserialize, Serialize};

/// Integer size in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Minimum and maximum size a recorded layout may occupy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constraints {
    pub min: Size,
    pub max: Size,
}

impl Constraints {
    /// Constraints that only admit `size`
    #[must_use]
    pub const fn exact(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Constraints admitting anything from zero up to `size`
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self {
            min: Size::new(0, 0),
            max: size,
        }
    }

    /// Clamp `size` into the constraints
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.min(self.max.width).max(self.min.width),
            size.height.min(self.max.height).max(self.min.height),
        )
    }
}

/// Conversion from device-independent units to pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub px_per_dp: f32,
    pub px_per_sp: f32,
}

impl Metric {
    /// Pixels for `dp` device-independent pixels
    #[must_use]
    pub fn dp(&self, dp: f32) -> i32 {
        (dp * non_zero(self.px_per_dp)).round() as i32
    }

    /// Pixels for `sp` scaled (font) pixels
    #[must_use]
    pub fn sp(&self, sp: f32) -> i32 {
        (sp * non_zero(self.px_per_sp)).round() as i32
    }
}

impl Default for Metric {
    fn default() -> Self {
        Self {
            px_per_dp: 1.0,
            px_per_sp: 1.0,
        }
    }
}

// An unset scale means 1:1.
fn non_zero(scale: f32) -> f32 {
    if scale == 0.0 {
        1.0
    } else {
        scale
    }
}

/// Layout inputs plus capture access to a shared buffer.
///
/// The buffer is only reachable through `begin_capture`, so a context can
/// append to the buffer but never reset it.
pub struct Context<'a, Op> {
    pub constraints: Constraints,
    pub metric: Metric,
    ops: &'a mut OperationBuffer<Op>,
}

impl<'a, Op> Context<'a, Op> {
    pub fn new(constraints: Constraints, metric: Metric, ops: &'a mut OperationBuffer<Op>) -> Self {
        Self {
            constraints,
            metric,
            ops,
        }
    }

    /// Start capturing into the shared buffer
    pub fn begin_capture(&mut self) -> RecordingSession<'_, Op> {
        self.ops.begin_capture()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.ops.generation()
    }
}
