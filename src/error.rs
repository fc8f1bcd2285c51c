//! Crate-level error types.
//!
//! [`SignalGlowError`] unifies every error source (configuration, timeframe
//! lookup, terminal I/O, JSON export) behind a single enum so callers can
//! match on the variant they care about while still using the `?` operator
//! for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SignalGlowError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum SignalGlowError {
    /// An environment variable held a value that could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// An unknown timeframe identifier was passed in. Never silently
    /// defaulted, so a typo cannot produce misaligned markers.
    #[error("invalid timeframe: {0:?}")]
    InvalidTimeframe(String),

    /// The display surface is unavailable (stdout is not a terminal).
    /// Generation still completes before the surface is opened, so cached
    /// data is ready once one appears.
    #[error("render target unavailable: {0}")]
    RenderTarget(String),

    /// Terminal setup or teardown failed.
    #[error("io error: {0}")]
    Io(String),

    /// JSON serialization failed during signal export.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
