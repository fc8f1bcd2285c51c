//! Master signal generator.
//!
//! Runs once per session, independent of any display timeframe. The horizon
//! is split into equal non-overlapping segments, one signal per segment with
//! kinds strictly alternating buy/sell, and each timestamp lands uniformly
//! within the central 80% of its segment so consecutive signals never crowd
//! a segment boundary.

use rand::Rng;

use crate::models::{MasterSignal, SignalKind};

/// Number of signals in a default session.
pub const DEFAULT_SIGNAL_COUNT: usize = 6;

/// Lowest confidence the generator will assign.
const CONFIDENCE_FLOOR: u8 = 80;

/// Price jitter around the baseline, plus or minus half.
const PRICE_JITTER: f64 = 6_000.0;

const BUY_REASONS: [&str; 5] = [
    "RSI oversold + bullish divergence detected",
    "Support level bounce + volume surge",
    "Moving average golden cross formation",
    "Bullish flag pattern breakout confirmed",
    "Fibonacci retracement 61.8% support",
];

const SELL_REASONS: [&str; 5] = [
    "RSI overbought + bearish divergence",
    "Resistance level rejection + high volume",
    "Moving average death cross formation",
    "Head and shoulders pattern completed",
    "Double top formation confirmed",
];

/// Generates `count` master signals across the `horizon_secs` ending at
/// `now`, sorted ascending by timestamp.
///
/// A zero horizon or zero count yields an empty list, not an error.
pub fn generate_master_signals<R: Rng>(
    horizon_secs: i64,
    count: usize,
    now: i64,
    rng: &mut R,
) -> Vec<MasterSignal> {
    if horizon_secs <= 0 || count == 0 {
        return Vec::new();
    }

    let horizon_start = now - horizon_secs;
    let segment = horizon_secs as f64 / count as f64;

    let mut signals = Vec::with_capacity(count);
    for i in 0..count {
        let kind = if i % 2 == 0 {
            SignalKind::Buy
        } else {
            SignalKind::Sell
        };

        // Uniform within the central 80% of segment i.
        let segment_start = horizon_start as f64 + i as f64 * segment;
        let offset = rng.gen_range(0.0..1.0) * (segment * 0.8) + segment * 0.1;
        let timestamp = (segment_start + offset).floor() as i64;

        let price = (crate::generator::BASE_PRICE
            + (rng.gen_range(0.0..1.0) - 0.5) * PRICE_JITTER)
            .round() as i64;

        signals.push(MasterSignal {
            id: format!("signal_{i}_{timestamp}"),
            timestamp,
            kind,
            price,
            reason: pick_reason(kind, rng).to_string(),
            confidence: rng.gen_range(CONFIDENCE_FLOOR..=100),
        });
    }

    // Segment placement already yields ascending timestamps; the sort is the
    // documented invariant, not an assumption about generation order.
    signals.sort_by_key(|s| s.timestamp);
    signals
}

/// Picks a cosmetic reason string for the signal kind.
fn pick_reason<R: Rng>(kind: SignalKind, rng: &mut R) -> &'static str {
    let pool = match kind {
        SignalKind::Buy => &BUY_REASONS,
        SignalKind::Sell => &SELL_REASONS,
    };
    pool[rng.gen_range(0..pool.len())]
}
