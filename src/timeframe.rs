//! Timeframe definitions and the interval/volatility configuration tables.
//!
//! The interval table is the anchor of the whole projection engine: a signal
//! is considered to belong to the bar that was open at its timestamp, and
//! that bar is found by flooring the timestamp to a multiple of the
//! timeframe's interval. The table must therefore match the generator's bar
//! spacing exactly.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SignalGlowError};

/// Chart timeframe options, finest to coarsest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    M1,
    M5,
    M15,
    H1,
    H4,
    D1,
}

impl Timeframe {
    /// All timeframes in coarseness order.
    pub const ALL: [Timeframe; 6] = [
        Timeframe::M1,
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::H1,
        Timeframe::H4,
        Timeframe::D1,
    ];

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::M1 => "1m",
            Timeframe::M5 => "5m",
            Timeframe::M15 => "15m",
            Timeframe::H1 => "1h",
            Timeframe::H4 => "4h",
            Timeframe::D1 => "1d",
        }
    }

    /// Returns the bar interval in seconds.
    #[must_use]
    pub fn interval_secs(&self) -> i64 {
        match self {
            Timeframe::M1 => 60,
            Timeframe::M5 => 300,
            Timeframe::M15 => 900,
            Timeframe::H1 => 3600,
            Timeframe::H4 => 14400,
            Timeframe::D1 => 86400,
        }
    }

    /// Returns the price swing scale for the random walk. Coarser bars
    /// aggregate more movement, so the table increases with coarseness.
    #[must_use]
    pub fn volatility(&self) -> f64 {
        match self {
            Timeframe::M1 => 50.0,
            Timeframe::M5 => 150.0,
            Timeframe::M15 => 300.0,
            Timeframe::H1 => 500.0,
            Timeframe::H4 => 1000.0,
            Timeframe::D1 => 2000.0,
        }
    }

    /// Floors a unix timestamp to the start of the bar it falls within.
    ///
    /// Uses euclidean division so pre-epoch timestamps still bucket onto a
    /// bar boundary at or before the timestamp.
    #[must_use]
    pub fn align(&self, timestamp: i64) -> i64 {
        let interval = self.interval_secs();
        timestamp.div_euclid(interval) * interval
    }

    /// Parses a timeframe from its display label.
    ///
    /// # Errors
    ///
    /// Returns [`SignalGlowError::InvalidTimeframe`] for an unrecognized
    /// label. This is the only place an unknown identifier can enter the
    /// system; everything downstream works with the closed enum.
    pub fn from_label(label: &str) -> Result<Timeframe> {
        match label {
            "1m" => Ok(Timeframe::M1),
            "5m" => Ok(Timeframe::M5),
            "15m" => Ok(Timeframe::M15),
            "1h" => Ok(Timeframe::H1),
            "4h" => Ok(Timeframe::H4),
            "1d" => Ok(Timeframe::D1),
            other => Err(SignalGlowError::InvalidTimeframe(other.to_string())),
        }
    }
}

impl std::str::FromStr for Timeframe {
    type Err = SignalGlowError;

    fn from_str(s: &str) -> Result<Timeframe> {
        Timeframe::from_label(s)
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for tf in Timeframe::ALL {
            assert_eq!(Timeframe::from_label(tf.label()).unwrap(), tf);
        }
    }

    #[test]
    fn labels_parse_via_fromstr() {
        assert_eq!("15m".parse::<Timeframe>().unwrap(), Timeframe::M15);
        assert!("1w".parse::<Timeframe>().is_err());
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = Timeframe::from_label("bogus").unwrap_err();
        assert!(matches!(err, SignalGlowError::InvalidTimeframe(ref s) if s == "bogus"));
    }

    #[test]
    fn interval_table_is_exact() {
        let expected = [60, 300, 900, 3600, 14400, 86400];
        for (tf, secs) in Timeframe::ALL.iter().zip(expected) {
            assert_eq!(tf.interval_secs(), secs);
        }
    }

    #[test]
    fn volatility_strictly_increases_with_coarseness() {
        for pair in Timeframe::ALL.windows(2) {
            assert!(pair[0].volatility() < pair[1].volatility());
        }
    }

    #[test]
    fn align_floors_to_bar_start() {
        for tf in Timeframe::ALL {
            let interval = tf.interval_secs();
            for ts in [0, 1, interval - 1, interval, 7 * interval + 42, 1_700_000_123] {
                let aligned = tf.align(ts);
                assert_eq!(aligned % interval, 0);
                assert!(aligned <= ts);
                assert!(ts < aligned + interval);
            }
        }
    }

    #[test]
    fn align_handles_pre_epoch_timestamps() {
        let aligned = Timeframe::H1.align(-10);
        assert_eq!(aligned, -3600);
        assert_eq!(aligned % 3600, 0);
        assert!(aligned <= -10 && -10 < aligned + 3600);
    }
}
