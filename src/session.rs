//! Session context for the generation and projection engine.
//!
//! The session owns everything with session lifetime: the master signal
//! list, the per-timeframe candle and marker caches, the clock the series
//! are anchored to, and the RNG. It is passed explicitly to callers rather
//! than living as ambient state, so independent sessions (and tests) never
//! interfere.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::cache::TimeframeCache;
use crate::config::EngineConfig;
use crate::generator::generate_series;
use crate::models::{Candle, Marker, MasterSignal};
use crate::projection::{VisibleWindow, project};
use crate::signals::generate_master_signals;
use crate::timeframe::Timeframe;

/// One visualization session: master signals plus memoized per-timeframe
/// candle series and marker sets.
pub struct Session {
    master_signals: Vec<MasterSignal>,
    data_cache: TimeframeCache<Vec<Candle>>,
    signal_cache: TimeframeCache<Vec<Marker>>,
    bar_count: usize,
    now: i64,
    rng: StdRng,
}

impl Session {
    /// Creates a session anchored to the wall clock. The RNG comes from
    /// `config.seed` when set, otherwise from entropy.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(config, unix_now(), rng)
    }

    /// Creates a session with an injected clock and RNG.
    ///
    /// Master signals are generated here, exactly once, across a horizon of
    /// `bar_count` hourly intervals ending at `now` — wide enough that every
    /// timeframe's visible window overlaps it.
    #[must_use]
    pub fn with_parts(config: &EngineConfig, now: i64, mut rng: StdRng) -> Self {
        let horizon_secs = config.bar_count as i64 * Timeframe::H1.interval_secs();
        let master_signals =
            generate_master_signals(horizon_secs, config.signal_count, now, &mut rng);
        debug!(count = master_signals.len(), "master signals generated");

        Self {
            master_signals,
            data_cache: TimeframeCache::new(),
            signal_cache: TimeframeCache::new(),
            bar_count: config.bar_count,
            now,
            rng,
        }
    }

    /// Returns the candle series for `timeframe`, generating it on first
    /// request and serving the cached series afterwards.
    pub fn candles(&mut self, timeframe: Timeframe) -> &[Candle] {
        let bar_count = self.bar_count;
        let now = self.now;
        let rng = &mut self.rng;
        self.data_cache.get_or_insert_with(timeframe, || {
            debug!(%timeframe, bar_count, "data cache miss, generating series");
            generate_series(timeframe, bar_count, now, rng)
        })
    }

    /// Returns the projected markers for `timeframe`, computing them on
    /// first request and serving the cached set afterwards.
    pub fn markers(&mut self, timeframe: Timeframe) -> &[Marker] {
        let signals = &self.master_signals;
        let window = VisibleWindow::for_timeframe(timeframe, self.bar_count, self.now);
        self.signal_cache.get_or_insert_with(timeframe, || {
            let markers = project(signals, timeframe, window);
            debug!(
                %timeframe,
                visible = markers.len(),
                total = signals.len(),
                "signal cache miss, projected markers"
            );
            markers
        })
    }

    /// Returns the candle series for `timeframe` only if already generated.
    /// The renderer reads through this; cache fills happen on timeframe
    /// changes, never mid-draw.
    #[must_use]
    pub fn cached_candles(&self, timeframe: Timeframe) -> Option<&[Candle]> {
        self.data_cache.get(timeframe).map(Vec::as_slice)
    }

    /// Returns the marker set for `timeframe` only if already projected.
    #[must_use]
    pub fn cached_markers(&self, timeframe: Timeframe) -> Option<&[Marker]> {
        self.signal_cache.get(timeframe).map(Vec::as_slice)
    }

    /// The session's canonical signal list, sorted by timestamp.
    #[must_use]
    pub fn master_signals(&self) -> &[MasterSignal] {
        &self.master_signals
    }

    /// Timeframes with a generated candle series, coarseness order.
    #[must_use]
    pub fn cached_data_timeframes(&self) -> Vec<Timeframe> {
        self.data_cache.cached_timeframes()
    }

    /// Timeframes with a projected marker set, coarseness order.
    #[must_use]
    pub fn cached_marker_timeframes(&self) -> Vec<Timeframe> {
        self.signal_cache.cached_timeframes()
    }

    /// The instant the session's series are anchored to, unix seconds.
    #[must_use]
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Bars generated per timeframe.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.bar_count
    }
}

/// Current wall clock as unix seconds.
fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
