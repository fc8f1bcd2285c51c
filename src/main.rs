use tokio::sync::mpsc;
use tracing::{error, info};

use signalglow::SignalGlowError;
use signalglow::config::fetch_config;
use signalglow::session::Session;
use signalglow::tui::event::{spawn_event_reader, spawn_tick_timer, update};
use signalglow::tui::{App, Tui, render, restore_terminal, setup_terminal};

/// UI tick interval in milliseconds.
const TICK_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<(), SignalGlowError> {
    // Log to stderr so the alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let app_config = fetch_config()?;
    let mut session = Session::new(&app_config.engine);

    // Headless inspection mode: print the master signal list and exit
    // without requiring a TTY.
    if app_config.dump_signals {
        let json = serde_json::to_string_pretty(session.master_signals())?;
        println!("{json}");
        return Ok(());
    }

    // Warm both caches for the initial timeframe before touching the
    // terminal, so an unavailable render target leaves the data ready.
    let timeframe = app_config.engine.timeframe;
    session.candles(timeframe);
    session.markers(timeframe);

    let mut app = App::new(session, timeframe);

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            error!("{e}");
            return Err(e);
        }
    };

    info!(%timeframe, "starting ui");
    let result = run(&mut terminal, &mut app).await;
    restore_terminal(&mut terminal)?;
    result
}

/// Draw/update loop: render the current state, then apply the next message.
async fn run(terminal: &mut Tui, app: &mut App) -> Result<(), SignalGlowError> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx, TICK_MS);

    while !app.should_quit {
        terminal
            .draw(|frame| render(frame, app))
            .map_err(|e| SignalGlowError::Io(e.to_string()))?;

        match rx.recv().await {
            Some(message) => update(app, message),
            None => break,
        }
    }

    Ok(())
}
