#![allow(dead_code)]
//! Common test utilities and helpers

use opcache::{Identifier, OperationCache, RecordingSession, ReplayHandle};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Honours `RUST_LOG`, so `RUST_LOG=opcache=debug cargo test` shows cache events.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A stand-in for rendering commands
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Translate { x: i32, y: i32 },
    Fill { rgba: u32 },
    Text(String),
}

/// Record a label: move, fill the background, draw the text
pub fn label(session: &mut RecordingSession<'_, DrawOp>, text: &str) {
    session.emit(DrawOp::Translate { x: 4, y: 2 });
    session.emit(DrawOp::Fill { rgba: 0xffff_ffff });
    session.emit(DrawOp::Text(text.to_string()));
}

pub fn add_label(cache: &mut OperationCache<DrawOp>, text: &str) -> (ReplayHandle, Identifier) {
    cache.add(|session| label(session, text))
}

/// Replay a live entry into a vector
pub fn replay_all(cache: &OperationCache<DrawOp>, id: Identifier) -> Option<Vec<DrawOp>> {
    let mut ops = Vec::new();
    cache
        .replay(id, |op| ops.push(op.clone()))
        .expect("live entries replay")
        .map(|_| ops)
}
