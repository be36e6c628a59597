//! Process-global allocation counters (feature `alloc-stats`).
//!
//! Every allocation-affecting storage operation reports here, giving the
//! enclosing matrix layer a cheap instrumentation hook: count the
//! allocations a hot loop performs, or watch live/peak buffer bytes
//! across a workload. Counters are relaxed atomics; totals are exact,
//! ordering between threads is not.

use std::sync::atomic::{AtomicU64, Ordering};

static ALLOCATIONS: AtomicU64 = AtomicU64::new(0);
static REALLOCATIONS: AtomicU64 = AtomicU64::new(0);
static DEALLOCATIONS: AtomicU64 = AtomicU64::new(0);
static LIVE_BYTES: AtomicU64 = AtomicU64::new(0);
static PEAK_BYTES: AtomicU64 = AtomicU64::new(0);

/// A point-in-time copy of the allocation counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocStats {
    /// Buffers allocated since process start (or the last [`reset`]).
    pub allocations: u64,
    /// In-place regrows/shrinks (conservative resizes).
    pub reallocations: u64,
    /// Buffers released.
    pub deallocations: u64,
    /// Bytes currently held by live storage buffers.
    pub live_bytes: u64,
    /// High-water mark of [`AllocStats::live_bytes`].
    pub peak_bytes: u64,
}

/// Read the current counter values.
pub fn snapshot() -> AllocStats {
    AllocStats {
        allocations: ALLOCATIONS.load(Ordering::Relaxed),
        reallocations: REALLOCATIONS.load(Ordering::Relaxed),
        deallocations: DEALLOCATIONS.load(Ordering::Relaxed),
        live_bytes: LIVE_BYTES.load(Ordering::Relaxed),
        peak_bytes: PEAK_BYTES.load(Ordering::Relaxed),
    }
}

/// Zero all counters. Intended for test and benchmark harnesses.
pub fn reset() {
    ALLOCATIONS.store(0, Ordering::Relaxed);
    REALLOCATIONS.store(0, Ordering::Relaxed);
    DEALLOCATIONS.store(0, Ordering::Relaxed);
    LIVE_BYTES.store(0, Ordering::Relaxed);
    PEAK_BYTES.store(0, Ordering::Relaxed);
}

fn raise_live(bytes: u64) {
    let live = LIVE_BYTES.fetch_add(bytes, Ordering::Relaxed) + bytes;
    PEAK_BYTES.fetch_max(live, Ordering::Relaxed);
}

pub(crate) fn record_alloc(bytes: usize) {
    ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
    raise_live(bytes as u64);
}

pub(crate) fn record_realloc(old_bytes: usize, new_bytes: usize) {
    REALLOCATIONS.fetch_add(1, Ordering::Relaxed);
    if new_bytes >= old_bytes {
        raise_live((new_bytes - old_bytes) as u64);
    } else {
        LIVE_BYTES.fetch_sub((old_bytes - new_bytes) as u64, Ordering::Relaxed);
    }
}

pub(crate) fn record_dealloc(bytes: usize) {
    DEALLOCATIONS.fetch_add(1, Ordering::Relaxed);
    LIVE_BYTES.fetch_sub(bytes as u64, Ordering::Relaxed);
}

// Counter behavior is exercised in tests/alloc_stats.rs, which runs in
// its own process; the counters are process-global, so asserting exact
// values here would race with the other unit tests' allocations.
