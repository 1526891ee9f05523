
use super::OperationCache;
use crate::identifier::Identifier;
use opcache_core::ReplayHandle;

/// Record an entry whose operations are `ops`
fn record(cache: &mut OperationCache<u32>, ops: &[u32]) -> (ReplayHandle, Identifier) {
    cache.add(|session| session.extend(ops.iter().copied()))
}

/// Replay a live entry into a vector
fn replayed(cache: &OperationCache<u32>, id: Identifier) -> Option<Vec<u32>> {
    let mut ops = Vec::new();
    cache
        .replay(id, |op| ops.push(*op))
        .unwrap()
        .map(|_| ops)
}
