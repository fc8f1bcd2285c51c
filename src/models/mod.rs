//! Shared data models.
//!
//! Candles and master signals are produced once per session by the
//! generators; markers are derived from signals per timeframe by the
//! projection engine. All three are immutable after creation.

pub mod candle;
pub mod marker;
pub mod signal;

pub use candle::Candle;
pub use marker::{Marker, MarkerColor, MarkerPosition, MarkerShape};
pub use signal::{MasterSignal, SignalKind};
