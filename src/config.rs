//! Application configuration loaded from environment variables.
//!
//! All variables are optional:
//! - `SIGNALGLOW_TIMEFRAME` — initial timeframe label (default `1m`)
//! - `SIGNALGLOW_BAR_COUNT` — bars per timeframe (default 1000)
//! - `SIGNALGLOW_SIGNAL_COUNT` — master signals per session (default 6)
//! - `SIGNALGLOW_SEED` — RNG seed for a reproducible session
//! - `SIGNALGLOW_DUMP_SIGNALS` — `true` prints the master signal list as
//!   JSON and exits instead of starting the UI (default `false`)

use crate::error::SignalGlowError;
use crate::timeframe::Timeframe;

/// Default number of bars generated per timeframe.
const DEFAULT_BAR_COUNT: usize = 1000;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub engine: EngineConfig,
    /// Print the master signal list as JSON and exit without a TTY.
    pub dump_signals: bool,
}

/// Parameters for the generation and projection engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Timeframe shown on startup.
    pub timeframe: Timeframe,
    /// Bars generated per timeframe.
    pub bar_count: usize,
    /// Master signals generated per session.
    pub signal_count: usize,
    /// Fixed RNG seed; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::M1,
            bar_count: DEFAULT_BAR_COUNT,
            signal_count: crate::signals::DEFAULT_SIGNAL_COUNT,
            seed: None,
        }
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`SignalGlowError::InvalidTimeframe`] for an unknown timeframe
/// label and [`SignalGlowError::Config`] for numeric values that fail to
/// parse. Nothing is silently defaulted once a variable is set.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let defaults = EngineConfig::default();

    let timeframe = match non_empty_var("SIGNALGLOW_TIMEFRAME") {
        Some(label) => Timeframe::from_label(&label)?,
        None => defaults.timeframe,
    };

    let bar_count = parse_var("SIGNALGLOW_BAR_COUNT")?.unwrap_or(defaults.bar_count);
    let signal_count = parse_var("SIGNALGLOW_SIGNAL_COUNT")?.unwrap_or(defaults.signal_count);
    let seed = parse_var("SIGNALGLOW_SEED")?;
    let dump_signals = parse_var("SIGNALGLOW_DUMP_SIGNALS")?.unwrap_or(false);

    Ok(AppConfig {
        engine: EngineConfig {
            timeframe,
            bar_count,
            signal_count,
            seed,
        },
        dump_signals,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Parses an environment variable if present and non-empty.
fn parse_var<T: std::str::FromStr>(name: &str) -> crate::Result<Option<T>> {
    match non_empty_var(name) {
        Some(value) => value.parse().map(Some).map_err(|_| {
            SignalGlowError::Config(format!("{name} has unparsable value {value:?}"))
        }),
        None => Ok(None),
    }
}
