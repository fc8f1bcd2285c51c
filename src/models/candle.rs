//! OHLC candlestick bar model.

use serde::{Deserialize, Serialize};

/// A single OHLC candlestick bar.
///
/// Prices are whole currency units (the generator rounds). For every bar,
/// `low <= min(open, close)` and `high >= max(open, close)`; within a
/// series, `time` strictly increases with spacing equal to the timeframe's
/// interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Start of this bar's time window, unix seconds.
    pub time: i64,
    pub open: i64,
    pub high: i64,
    pub low: i64,
    pub close: i64,
}

impl Candle {
    /// True when the bar closed at or above its open.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}
