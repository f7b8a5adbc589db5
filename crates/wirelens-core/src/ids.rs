// ── Stable per-instance identifiers ──
//
// A monotonic counter hands out `prefix + sequence` strings that are unique
// for the life of the process. Instances hold a `LazyId`, which asks the
// allocator once on first use and keeps the answer.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use serde::Serialize;

/// Prefix used when the caller does not supply one.
pub const DEFAULT_PREFIX: &str = "id-";

/// Seed for the process-wide allocator. Only needs to be non-zero.
const GLOBAL_SEED: u64 = 1;

/// An allocated identifier: `prefix` immediately followed by `sequence`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StableId {
    prefix: String,
    sequence: u64,
}

impl StableId {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.sequence)
    }
}

/// Monotonic id source. Never resets, never hands out a sequence twice.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// An isolated allocator starting at `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            next: AtomicU64::new(seed),
        }
    }

    /// The process-wide allocator, created on first access.
    pub fn global() -> Arc<IdAllocator> {
        static GLOBAL: OnceLock<Arc<IdAllocator>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(IdAllocator::new(GLOBAL_SEED))))
    }

    /// Allocate the next id under `prefix`.
    ///
    /// # Panics
    ///
    /// Once every sequence below `u64::MAX` has been handed out. The counter
    /// never wraps back to reuse one.
    pub fn allocate(&self, prefix: &str) -> StableId {
        let sequence = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .expect("id sequence space exhausted");
        StableId {
            prefix: prefix.to_owned(),
            sequence,
        }
    }

    /// Allocate the next id under [`DEFAULT_PREFIX`].
    pub fn allocate_default(&self) -> StableId {
        self.allocate(DEFAULT_PREFIX)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(GLOBAL_SEED)
    }
}

/// Per-instance id handle: allocates on first request, then always returns
/// the same id.
#[derive(Debug)]
pub struct LazyId {
    allocator: Arc<IdAllocator>,
    prefix: String,
    id: OnceLock<StableId>,
}

impl LazyId {
    pub fn new(allocator: Arc<IdAllocator>, prefix: impl Into<String>) -> Self {
        Self {
            allocator,
            prefix: prefix.into(),
            id: OnceLock::new(),
        }
    }

    /// A handle on the process-wide allocator.
    pub fn global(prefix: impl Into<String>) -> Self {
        Self::new(IdAllocator::global(), prefix)
    }

    pub fn get(&self) -> &StableId {
        self.id.get_or_init(|| self.allocator.allocate(&self.prefix))
    }

    /// Whether the id has been computed yet.
    pub fn is_allocated(&self) -> bool {
        self.id.get().is_some()
    }
}
