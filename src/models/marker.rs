//! Chart marker model.
//!
//! A marker is the timeframe-specific rendering of a master signal: its time
//! is aligned to that timeframe's bar grid, and its visual attributes are a
//! fixed, symmetric function of the signal kind. Price, reason, and
//! confidence play no part in a marker's visual identity.

use serde::{Deserialize, Serialize};

use crate::models::signal::{MasterSignal, SignalKind};
use crate::timeframe::Timeframe;

/// Vertical placement relative to the bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerPosition {
    BelowBar,
    AboveBar,
}

/// Arrow direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerShape {
    ArrowUp,
    ArrowDown,
}

/// Translucent glow color class. Markers that alias to the same bucket on a
/// coarse timeframe stack on top of each other, which brightens the glow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerColor {
    BuyGlow,
    SellGlow,
}

/// Glow markers are drawn oversized.
const GLOW_SIZE: u8 = 5;

/// A renderable annotation derived from a master signal and a timeframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Bar-grid aligned time, unix seconds.
    pub time: i64,
    pub position: MarkerPosition,
    pub color: MarkerColor,
    pub shape: MarkerShape,
    pub size: u8,
}

impl Marker {
    /// Builds the marker for `signal` on `timeframe`'s bar grid.
    ///
    /// Buy signals sit below the bar pointing up; sell signals sit above the
    /// bar pointing down.
    #[must_use]
    pub fn for_signal(signal: &MasterSignal, timeframe: Timeframe) -> Marker {
        let (position, color, shape) = match signal.kind {
            SignalKind::Buy => (
                MarkerPosition::BelowBar,
                MarkerColor::BuyGlow,
                MarkerShape::ArrowUp,
            ),
            SignalKind::Sell => (
                MarkerPosition::AboveBar,
                MarkerColor::SellGlow,
                MarkerShape::ArrowDown,
            ),
        };

        Marker {
            time: timeframe.align(signal.timestamp),
            position,
            color,
            shape,
            size: GLOW_SIZE,
        }
    }
}
