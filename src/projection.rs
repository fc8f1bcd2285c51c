//! Signal projection engine.
//!
//! Maps the master signal list onto one timeframe's bar grid: each signal is
//! bucketed onto the start of the bar that was open at its timestamp, then
//! kept only if that bar lies inside the chart's visible window. A signal
//! dropped here may still appear on a coarser or finer timeframe whose
//! window differs.

use crate::models::{Marker, MasterSignal};
use crate::timeframe::Timeframe;

/// The span of time covered by the rendered candle series, inclusive on
/// both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleWindow {
    pub start: i64,
    pub end: i64,
}

impl VisibleWindow {
    /// The window covered by `bar_count` bars of `timeframe` ending at `now`.
    #[must_use]
    pub fn for_timeframe(timeframe: Timeframe, bar_count: usize, now: i64) -> VisibleWindow {
        VisibleWindow {
            start: now - bar_count as i64 * timeframe.interval_secs(),
            end: now,
        }
    }

    #[must_use]
    pub fn contains(&self, time: i64) -> bool {
        time >= self.start && time <= self.end
    }
}

/// Projects master signals onto `timeframe`'s bar grid, keeping those whose
/// aligned time falls inside `window`.
///
/// Signals that alias to the same bucket each produce their own marker; the
/// overlap is the intended glow-stacking effect. An empty master list yields
/// an empty marker list.
#[must_use]
pub fn project(
    signals: &[MasterSignal],
    timeframe: Timeframe,
    window: VisibleWindow,
) -> Vec<Marker> {
    signals
        .iter()
        .filter(|signal| window.contains(timeframe.align(signal.timestamp)))
        .map(|signal| Marker::for_signal(signal, timeframe))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MarkerPosition, MarkerShape, SignalKind};

    const NOW: i64 = 1_756_000_000;

    fn signal(kind: SignalKind, timestamp: i64) -> MasterSignal {
        MasterSignal {
            id: format!("signal_0_{timestamp}"),
            timestamp,
            kind,
            price: 45000,
            reason: "Fibonacci retracement 61.8% support".to_string(),
            confidence: 85,
        }
    }

    #[test]
    fn aligns_to_the_bar_open_at_the_signal_time() {
        // A signal 3700s after data start on 1h buckets onto the second
        // hourly bar.
        let data_start = Timeframe::H1.align(NOW - 1000 * 3600);
        let signals = vec![signal(SignalKind::Buy, data_start + 3700)];
        let window = VisibleWindow::for_timeframe(Timeframe::H1, 1000, NOW);

        let markers = project(&signals, Timeframe::H1, window);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].time, data_start + 3600);
    }

    #[test]
    fn bucketing_property_holds_on_every_timeframe() {
        let timestamps = [NOW - 999_999, NOW - 86_401, NOW - 3_599, NOW - 61, NOW];
        for tf in Timeframe::ALL {
            let interval = tf.interval_secs();
            for ts in timestamps {
                let aligned = tf.align(ts);
                assert!(aligned <= ts && ts < aligned + interval);
                assert_eq!(aligned % interval, 0);
            }
        }
    }

    #[test]
    fn drops_signals_outside_the_visible_window() {
        // 1000 one-minute bars cover ~16.7 hours; a signal from three days
        // ago is visible on 1d but not on 1m.
        let old = signal(SignalKind::Sell, NOW - 3 * 86_400);

        let narrow = VisibleWindow::for_timeframe(Timeframe::M1, 1000, NOW);
        assert!(project(std::slice::from_ref(&old), Timeframe::M1, narrow).is_empty());

        let wide = VisibleWindow::for_timeframe(Timeframe::D1, 1000, NOW);
        assert_eq!(project(std::slice::from_ref(&old), Timeframe::D1, wide).len(), 1);
    }

    #[test]
    fn empty_master_list_projects_to_no_markers() {
        let window = VisibleWindow::for_timeframe(Timeframe::M5, 1000, NOW);
        assert!(project(&[], Timeframe::M5, window).is_empty());
    }

    #[test]
    fn kind_mapping_is_symmetric() {
        let signals = vec![
            signal(SignalKind::Buy, NOW - 120),
            signal(SignalKind::Sell, NOW - 60),
        ];
        let window = VisibleWindow::for_timeframe(Timeframe::M1, 1000, NOW);
        let markers = project(&signals, Timeframe::M1, window);

        assert_eq!(markers[0].position, MarkerPosition::BelowBar);
        assert_eq!(markers[0].shape, MarkerShape::ArrowUp);
        assert_eq!(markers[1].position, MarkerPosition::AboveBar);
        assert_eq!(markers[1].shape, MarkerShape::ArrowDown);
    }

    #[test]
    fn aliased_signals_each_keep_their_marker() {
        // Two signals in the same daily bucket stack instead of deduping.
        let day = Timeframe::D1.align(NOW - 86_400);
        let signals = vec![
            signal(SignalKind::Buy, day + 100),
            signal(SignalKind::Buy, day + 50_000),
        ];
        let window = VisibleWindow::for_timeframe(Timeframe::D1, 1000, NOW);

        let markers = project(&signals, Timeframe::D1, window);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].time, markers[1].time);
    }

    #[test]
    fn projection_is_stable_under_rerequest() {
        let signals = vec![
            signal(SignalKind::Buy, NOW - 7_000),
            signal(SignalKind::Sell, NOW - 3_000),
        ];
        let window = VisibleWindow::for_timeframe(Timeframe::M15, 1000, NOW);

        assert_eq!(
            project(&signals, Timeframe::M15, window),
            project(&signals, Timeframe::M15, window)
        );
    }
}
