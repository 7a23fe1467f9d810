use std::sync::atomic::{AtomicU64, Ordering};

use derive_more::Display;

/// Identity of a container state: which container (`origin`) and which of its mutations
/// (`generation`) a traversal was computed from.
///
/// Every constructed or cloned container receives a fresh origin, and every successful mutation
/// bumps the generation. Cursors compare equal only when they share a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{origin}@{generation}")]
pub struct Snapshot {
    origin: u64,
    generation: u64,
}

impl Snapshot {
    pub(crate) fn new(origin: u64, generation: u64) -> Self {
        Self { origin, generation }
    }

    pub fn origin(&self) -> u64 {
        self.origin
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Allocates a process-unique container origin.
pub(crate) fn next_origin() -> u64 {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    NEXT.fetch_add(1, Ordering::Relaxed)
}
