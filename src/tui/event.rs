//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::timeframe::Timeframe;

use super::app::App;

/// Smallest terminal the chart renders legibly in.
const MIN_COLS: u16 = 60;
const MIN_ROWS: u16 = 20;

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// Request to quit the application.
    Quit,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::Quit => app.should_quit = true,
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(w, h) => {
            // The next draw reflows automatically; only warn when the chart
            // no longer fits at all.
            if w < MIN_COLS || h < MIN_ROWS {
                app.show_error(format!("terminal too small ({w}x{h}, need {MIN_COLS}x{MIN_ROWS})"));
            }
        }
        Event::Tick => app.clear_stale_errors(),
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        // Timeframe shortcuts
        KeyCode::Char('1') => app.change_timeframe(Timeframe::M1),
        KeyCode::Char('2') => app.change_timeframe(Timeframe::M5),
        KeyCode::Char('3') => app.change_timeframe(Timeframe::M15),
        KeyCode::Char('4') => app.change_timeframe(Timeframe::H1),
        KeyCode::Char('5') => app.change_timeframe(Timeframe::H4),
        KeyCode::Char('6') => app.change_timeframe(Timeframe::D1),

        _ => {}
    }
}
