//! Fetch generation tracking.
//!
//! List fetches can overlap when the user refreshes quickly. Each fetch
//! takes a generation number before the request goes out; by the time a
//! response arrives, a newer fetch may have started, in which case the
//! stale response is discarded instead of overwriting fresher data.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter identifying the latest in-flight fetch.
#[derive(Debug, Default)]
pub struct FetchGeneration {
    counter: AtomicU64,
}

impl FetchGeneration {
    /// Creates a fresh counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch and returns its generation number.
    pub fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns true while no newer fetch has started.
    pub fn is_current(&self, generation: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == generation
    }
}
