//! End-to-end session behavior: generation, projection, and caching working
//! together the way the UI drives them.

use rand::SeedableRng;
use rand::rngs::StdRng;

use signalglow::Timeframe;
use signalglow::config::EngineConfig;
use signalglow::projection::{VisibleWindow, project};
use signalglow::session::Session;

const NOW: i64 = 1_756_000_000;

fn session_with_seed(seed: u64) -> Session {
    let config = EngineConfig {
        seed: Some(seed),
        ..EngineConfig::default()
    };
    Session::with_parts(&config, NOW, StdRng::seed_from_u64(seed))
}

#[test]
fn one_minute_series_covers_the_last_thousand_minutes() {
    let mut session = session_with_seed(1);
    let candles = session.candles(Timeframe::M1);

    assert_eq!(candles.len(), 1000);
    assert_eq!(candles.last().unwrap().time, NOW);
    for pair in candles.windows(2) {
        assert_eq!(pair[1].time - pair[0].time, 60);
    }
}

#[test]
fn every_timeframe_generates_valid_bars() {
    let mut session = session_with_seed(2);
    for tf in Timeframe::ALL {
        let candles = session.candles(tf).to_vec();
        assert_eq!(candles.len(), 1000);
        for candle in candles {
            assert!(candle.low <= candle.open.min(candle.close));
            assert!(candle.high >= candle.open.max(candle.close));
        }
    }
}

#[test]
fn timeframe_round_trip_serves_identical_data() {
    // The generator is random per invocation, so getting the same series
    // and markers back after visiting other timeframes proves both caches
    // computed exactly once.
    let mut session = session_with_seed(3);

    let m5_candles = session.candles(Timeframe::M5).to_vec();
    let m5_markers = session.markers(Timeframe::M5).to_vec();

    for tf in [Timeframe::H1, Timeframe::D1, Timeframe::M1] {
        session.candles(tf);
        session.markers(tf);
    }

    assert_eq!(session.candles(Timeframe::M5), m5_candles.as_slice());
    assert_eq!(session.markers(Timeframe::M5), m5_markers.as_slice());
}

#[test]
fn markers_follow_signals_across_timeframes() {
    // Every marker on every timeframe must sit on that timeframe's bar grid
    // and correspond to a master signal in the same bucket.
    let mut session = session_with_seed(4);
    let signals: Vec<i64> = session
        .master_signals()
        .iter()
        .map(|s| s.timestamp)
        .collect();

    for tf in Timeframe::ALL {
        let interval = tf.interval_secs();
        for marker in session.markers(tf).to_vec() {
            assert_eq!(marker.time % interval, 0);
            assert!(
                signals
                    .iter()
                    .any(|&ts| tf.align(ts) == marker.time),
                "marker at {} on {tf} matches no signal",
                marker.time
            );
        }
    }
}

#[test]
fn signal_shortly_after_data_start_lands_on_the_second_hourly_bar() {
    // A signal 3700s after data start lands on the second hourly bucket.
    let session = session_with_seed(5);
    let data_start = NOW - 1000 * 3600;

    let mut signal = session.master_signals()[0].clone();
    signal.timestamp = data_start + 3700;

    let window = VisibleWindow::for_timeframe(Timeframe::H1, 1000, NOW);
    let markers = project(&[signal], Timeframe::H1, window);

    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].time, Timeframe::H1.align(data_start) + 3600);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let mut a = session_with_seed(42);
    let mut b = session_with_seed(42);

    assert_eq!(a.master_signals(), b.master_signals());
    assert_eq!(a.candles(Timeframe::H4), b.candles(Timeframe::H4));
    assert_eq!(a.markers(Timeframe::H4), b.markers(Timeframe::H4));
}

#[test]
fn differently_seeded_sessions_diverge() {
    let mut a = session_with_seed(1);
    let mut b = session_with_seed(2);
    assert_ne!(a.candles(Timeframe::M1), b.candles(Timeframe::M1));
}
