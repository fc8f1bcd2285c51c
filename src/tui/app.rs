//! Application state for the TUI.

use std::time::Instant;

use tracing::info;

use crate::session::Session;
use crate::timeframe::Timeframe;

/// Central application state container.
pub struct App {
    /// Engine context: master signals plus both caches.
    pub session: Session,
    /// Timeframe currently displayed.
    pub timeframe: Timeframe,
    /// Error message to display (clears after timeout).
    pub error_message: Option<ErrorDisplay>,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates the app and warms both caches for the initial timeframe.
    #[must_use]
    pub fn new(mut session: Session, timeframe: Timeframe) -> Self {
        session.candles(timeframe);
        session.markers(timeframe);
        Self {
            session,
            timeframe,
            error_message: None,
            should_quit: false,
        }
    }

    /// Switches the displayed timeframe, filling the data and signal caches
    /// on first visit. A no-op when the timeframe is already shown.
    pub fn change_timeframe(&mut self, timeframe: Timeframe) {
        if timeframe == self.timeframe {
            return;
        }
        self.session.candles(timeframe);
        self.session.markers(timeframe);
        self.timeframe = timeframe;
        info!(%timeframe, "timeframe changed");
    }

    /// Sets an error message to display.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(ErrorDisplay {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears error messages older than 5 seconds.
    pub fn clear_stale_errors(&mut self) {
        if let Some(ref error) = self.error_message
            && error.timestamp.elapsed() > std::time::Duration::from_secs(5)
        {
            self.error_message = None;
        }
    }
}

/// Error message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct ErrorDisplay {
    /// The error message.
    pub message: String,
    /// When the error was shown.
    pub timestamp: Instant,
}
