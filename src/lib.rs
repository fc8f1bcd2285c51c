//! Synthetic candlestick chart with simulated AI signal overlays.
//!
//! Everything is generated in memory per session: a random-walk OHLC series
//! for each timeframe, and one master list of buy/sell signals that gets
//! re-projected onto whichever bar grid is currently displayed. Both results
//! are memoized per timeframe so switching back is free.

pub mod cache;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod projection;
pub mod session;
pub mod signals;
pub mod timeframe;
pub mod tui;

pub use error::{Result, SignalGlowError};
pub use timeframe::Timeframe;
