//! Terminal user interface.
//!
//! A Ratatui front end for the engine: candle chart with signal marker
//! overlays, a master signal table, and timeframe switching on the digit
//! keys. Display plumbing only — all generation, alignment, and caching
//! live in the engine modules.

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
