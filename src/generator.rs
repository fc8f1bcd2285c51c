//! Synthetic OHLC series generator.
//!
//! A backward-anchored random walk: the series covers the `bar_count`
//! intervals ending at `now`, the base price drifts by a uniform delta
//! scaled by the timeframe's volatility, and each bar's close becomes the
//! next bar's base so the walk is continuous.

use rand::Rng;

use crate::models::Candle;
use crate::timeframe::Timeframe;

/// Starting price for the walk, whole currency units.
pub const BASE_PRICE: f64 = 45_000.0;

/// Hard floor for the walk base, keeping the series out of degenerate
/// territory no matter how long it runs.
pub const FLOOR_PRICE: f64 = 30_000.0;

/// Generates `bar_count` candles for `timeframe`, ending at `now`.
///
/// Deterministic in structure (count, spacing, OHLC invariants) but not in
/// value: price deltas come from `rng`, so re-invocation with a fresh RNG
/// yields a different series. Tests inject a seeded [`rand::rngs::StdRng`]
/// to pin exact values.
pub fn generate_series<R: Rng>(
    timeframe: Timeframe,
    bar_count: usize,
    now: i64,
    rng: &mut R,
) -> Vec<Candle> {
    let interval = timeframe.interval_secs();
    let volatility = timeframe.volatility();

    let mut base = BASE_PRICE;
    let mut series = Vec::with_capacity(bar_count);

    for i in (0..bar_count).rev() {
        let time = now - i as i64 * interval;

        let change = (rng.gen_range(0.0..1.0) - 0.5) * volatility;
        base = (base + change).max(FLOOR_PRICE);

        let open = base;
        let close = open + (rng.gen_range(0.0..1.0) - 0.5) * (volatility * 0.5);
        let high = open.max(close) + rng.gen_range(0.0..1.0) * (volatility * 0.3);
        let low = open.min(close) - rng.gen_range(0.0..1.0) * (volatility * 0.3);

        series.push(Candle {
            time,
            open: open.round() as i64,
            high: high.round() as i64,
            low: low.round() as i64,
            close: close.round() as i64,
        });

        // Continue the walk from this bar's close.
        base = close;
    }

    series
}
