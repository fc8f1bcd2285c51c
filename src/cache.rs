//! Per-timeframe memoization.
//!
//! Entries live for the session; there is no eviction because the key space
//! is the six timeframes. Single-threaded by design: everything runs on the
//! event-loop thread, so no locking discipline is needed.

use std::collections::HashMap;

use crate::timeframe::Timeframe;

/// A key-value store memoizing one value per timeframe.
#[derive(Debug, Default)]
pub struct TimeframeCache<T> {
    entries: HashMap<Timeframe, T>,
}

impl<T> TimeframeCache<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the cached value for `timeframe`, computing and storing it
    /// with `compute` on first request. `compute` runs at most once per
    /// timeframe for the lifetime of the cache.
    pub fn get_or_insert_with(&mut self, timeframe: Timeframe, compute: impl FnOnce() -> T) -> &T {
        self.entries.entry(timeframe).or_insert_with(compute)
    }

    #[must_use]
    pub fn get(&self, timeframe: Timeframe) -> Option<&T> {
        self.entries.get(&timeframe)
    }

    /// Cached timeframes in coarseness order, for status display.
    #[must_use]
    pub fn cached_timeframes(&self) -> Vec<Timeframe> {
        Timeframe::ALL
            .into_iter()
            .filter(|tf| self.entries.contains_key(tf))
            .collect()
    }
}
