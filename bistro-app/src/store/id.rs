//! Identifier allocation

use std::sync::atomic::{AtomicI64, Ordering};

/// Sequential id allocator shared by all collections of a store
///
/// Monotonic for the process lifetime; ids are never reused, including after
/// deletes.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicI64,
}

impl IdAllocator {
    /// Create an allocator starting at 1
    pub fn new() -> Self {
        Self {
            next: AtomicI64::new(1),
        }
    }

    /// Allocate a fresh id
    pub fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
