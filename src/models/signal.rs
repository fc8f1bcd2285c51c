//! Master signal model.

use serde::{Deserialize, Serialize};

/// Trading direction of a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Buy,
    Sell,
}

impl SignalKind {
    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Buy => "BUY",
            SignalKind::Sell => "SELL",
        }
    }
}

/// A timeframe-independent trading-direction event.
///
/// Master signals are generated once per session, sorted ascending by
/// timestamp, and shared read-only by the projection engine across all
/// timeframes. The `reason` text is cosmetic; it is not computed from the
/// generated price data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterSignal {
    pub id: String,
    /// Absolute event time, unix seconds.
    pub timestamp: i64,
    pub kind: SignalKind,
    /// Synthetic price near the baseline, whole currency units.
    pub price: i64,
    pub reason: String,
    /// Percentage in `[80, 100]`.
    pub confidence: u8,
}
