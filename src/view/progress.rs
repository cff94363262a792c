//! Stream position gauges

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use super::utils::format_duration;

pub fn render_stream_gauge(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    position_secs: f64,
    duration_secs: f64,
    detail: String,
    color: Color,
) {
    let time_str = format!(
        "{} / {}",
        format_duration(position_secs),
        format_duration(duration_secs)
    );

    let progress_ratio = if duration_secs > 0.0 {
        (position_secs / duration_secs).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .title_bottom(Line::from(format!(" {} ", detail)).right_aligned()),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(progress_ratio)
        .label(time_str);

    frame.render_widget(gauge, area);
}
