//! Main UI rendering.
//!
//! Draws the candle chart for the active timeframe with signal markers
//! overlaid on the bars they align to, plus the master signal table and a
//! status line showing which timeframes are already cached.

use std::collections::HashMap;

use chrono::DateTime;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{Candle, Marker, MarkerColor, MarkerShape, SignalKind};
use crate::timeframe::Timeframe;

use super::app::App;

/// Columns reserved for the price axis ("     45000 │").
const PRICE_AXIS_WIDTH: usize = 12;

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(10),   // Chart
            Constraint::Length(1), // Timeframe selector
            Constraint::Length(9), // Signal table
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    render_title(frame, main_layout[0]);
    render_chart(frame, main_layout[1], app);
    render_timeframe_selector(frame, main_layout[2], app);
    render_signals(frame, main_layout[3], app);
    render_status_bar(frame, main_layout[4], app);
    render_keybindings(frame, main_layout[5]);
}

/// Renders the title bar.
fn render_title(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " signalglow ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "BTC/USD — synthetic feed, simulated AI signals",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the candle chart with marker overlays.
fn render_chart(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(" Chart [{}] ", app.timeframe.label());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(candles) = app.session.cached_candles(app.timeframe) else {
        let para = Paragraph::new("No data").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, inner);
        return;
    };
    let markers = app.session.cached_markers(app.timeframe).unwrap_or(&[]);

    let cols = (inner.width as usize).saturating_sub(PRICE_AXIS_WIDTH);
    let height = inner.height as usize;
    if candles.is_empty() || cols == 0 || height < 2 {
        return;
    }

    // Newest bars fill the available columns, chronological left to right.
    let visible = &candles[candles.len().saturating_sub(cols)..];

    let min_price = visible.iter().map(|c| c.low).min().unwrap_or(0);
    let max_price = visible.iter().map(|c| c.high).max().unwrap_or(1);
    let range = ((max_price - min_price) as f64).max(1.0);

    let row_of = |price: f64| -> usize {
        let row = (max_price as f64 - price) / range * (height - 1) as f64;
        (row.round().max(0.0) as usize).min(height - 1)
    };

    // Markers grouped by aligned bar time; aliased signals stack and render
    // with a bolder glow.
    let mut by_time: HashMap<i64, Vec<&Marker>> = HashMap::new();
    for marker in markers {
        by_time.entry(marker.time).or_default().push(marker);
    }

    // Per column: (row, glyph, color, stacked) for each arrow on that bar.
    let arrows: Vec<Vec<(usize, &'static str, Color, bool)>> = visible
        .iter()
        .map(|candle| {
            let mut slots = Vec::new();
            if let Some(group) = by_time.get(&candle.time) {
                let stacked = group.len() > 1;
                for marker in group {
                    let (row, glyph) = match marker.shape {
                        MarkerShape::ArrowUp => {
                            ((row_of(candle.low as f64) + 1).min(height - 1), "▲")
                        }
                        MarkerShape::ArrowDown => (row_of(candle.high as f64).saturating_sub(1), "▼"),
                    };
                    let color = match marker.color {
                        MarkerColor::BuyGlow => Color::Cyan,
                        MarkerColor::SellGlow => Color::Magenta,
                    };
                    slots.push((row, glyph, color, stacked));
                }
            }
            slots
        })
        .collect();

    let mut lines: Vec<Line> = Vec::with_capacity(height);
    for row in 0..height {
        let price_level = max_price as f64 - range * row as f64 / (height - 1) as f64;

        let mut row_chars: Vec<Span> = Vec::with_capacity(visible.len() + 1);
        row_chars.push(Span::raw(format!("{:>10.0} │", price_level)));

        for (candle, slots) in visible.iter().zip(&arrows) {
            if let Some((_, glyph, color, stacked)) = slots.iter().find(|(r, ..)| *r == row) {
                let mut style = Style::default().fg(*color);
                if *stacked {
                    style = style.add_modifier(Modifier::BOLD);
                }
                row_chars.push(Span::styled(*glyph, style));
                continue;
            }

            row_chars.push(candle_span(candle, price_level));
        }

        lines.push(Line::from(row_chars));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Picks the chart character for one candle at one price row.
fn candle_span(candle: &Candle, price_level: f64) -> Span<'static> {
    let color = if candle.is_bullish() {
        Color::Green
    } else {
        Color::Red
    };

    let body_top = candle.open.max(candle.close) as f64;
    let body_bottom = candle.open.min(candle.close) as f64;

    let glyph = if price_level <= candle.high as f64 && price_level >= body_top {
        "│" // Upper wick
    } else if price_level < body_top && price_level > body_bottom {
        "█" // Body
    } else if price_level <= body_bottom && price_level >= candle.low as f64 {
        "│" // Lower wick
    } else {
        " "
    };

    Span::styled(glyph, Style::default().fg(color))
}

/// Renders the timeframe selector line.
fn render_timeframe_selector(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ".repeat(PRICE_AXIS_WIDTH))];
    for tf in Timeframe::ALL {
        let style = if tf == app.timeframe {
            Style::default().bg(Color::Cyan).fg(Color::Black)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {} ", tf.label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the master signal table.
fn render_signals(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" AI Signals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(
            "{:<16} {:<5} {:>8} {:>6}  {}",
            "Time", "Side", "Price", "Conf", "Reason"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let signals = app.session.master_signals();
    for signal in signals.iter().take(inner.height.saturating_sub(1) as usize) {
        let side_color = match signal.kind {
            SignalKind::Buy => Color::Cyan,
            SignalKind::Sell => Color::Magenta,
        };

        lines.push(Line::from(vec![
            Span::raw(format!("{:<16} ", format_timestamp(signal.timestamp))),
            Span::styled(
                format!("{:<5} ", signal.kind.label()),
                Style::default().fg(side_color),
            ),
            Span::raw(format!("{:>8} ", signal.price)),
            Span::raw(format!("{:>5}%  ", signal.confidence)),
            Span::styled(
                signal.reason.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    if signals.is_empty() {
        lines.push(Line::from(Span::styled(
            "No signals this session",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the status bar.
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let cached = |tfs: Vec<Timeframe>| -> String {
        if tfs.is_empty() {
            "-".to_string()
        } else {
            tfs.iter()
                .map(Timeframe::label)
                .collect::<Vec<_>>()
                .join(",")
        }
    };

    let error_span = if let Some(ref error) = app.error_message {
        Span::styled(
            format!(" {} ", error.message),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::raw("")
    };

    let spans = vec![
        Span::styled(
            format!(" {} ", app.timeframe.label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("│"),
        Span::raw(format!(
            " data cached: {} ",
            cached(app.session.cached_data_timeframes())
        )),
        Span::raw("│"),
        Span::raw(format!(
            " markers cached: {} ",
            cached(app.session.cached_marker_timeframes())
        )),
        Span::raw("│"),
        Span::raw(format!(
            " {} bars, {} signals ",
            app.session.bar_count(),
            app.session.master_signals().len()
        )),
        Span::raw("│"),
        Span::raw(format!(" as of {} ", format_timestamp(app.session.now()))),
        Span::raw("│"),
        error_span,
    ];

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = "[1-6] timeframe  [q] quit";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

/// Formats a unix timestamp as `YYYY-MM-DD HH:MM` for the signal table.
fn format_timestamp(unix_secs: i64) -> String {
    match DateTime::from_timestamp(unix_secs, 0) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_formatting() {
        // 2024-01-15T12:00:00Z
        assert_eq!(format_timestamp(1_705_320_000), "2024-01-15 12:00");
        // Epoch
        assert_eq!(format_timestamp(0), "1970-01-01 00:00");
    }

    #[test]
    fn timestamps_a_year_apart_stay_distinguishable() {
        // 2024 is a leap year, so 366 days later is the same calendar day.
        let jan_2024 = 1_705_320_000;
        let jan_2025 = jan_2024 + 366 * 86_400;
        assert_ne!(format_timestamp(jan_2024), format_timestamp(jan_2025));
        assert_eq!(format_timestamp(jan_2025), "2025-01-15 12:00");
    }

    #[test]
    fn candle_glyphs_cover_wick_body_and_blank() {
        let candle = Candle {
            time: 0,
            open: 100,
            high: 110,
            low: 90,
            close: 105,
        };
        assert_eq!(candle_span(&candle, 108.0).content, "│");
        assert_eq!(candle_span(&candle, 103.0).content, "█");
        assert_eq!(candle_span(&candle, 95.0).content, "│");
        assert_eq!(candle_span(&candle, 120.0).content, " ");
    }
}
