//! View module - UI rendering
//!
//! This module handles all UI rendering for the host using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared formatting helpers
//! - `layout`: Header, skip table, controls and help line
//! - `progress`: Per-stream position gauges

mod utils;
mod layout;
mod progress;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    Frame,
};

use crate::controller::SyncStatus;
use crate::model::SkipRange;

/// Everything one frame needs, gathered by the host before drawing.
pub struct ViewState<'a> {
    pub status: SyncStatus,
    pub video_playing: bool,
    pub audio_playing: bool,
    /// Volume actually applied to each source, `None` when not mounted.
    pub video_volume: Option<f64>,
    pub audio_volume: Option<f64>,
    pub video_url: &'a str,
    pub audio_url: &'a str,
    pub skip_ranges: &'a [SkipRange],
    pub video_position: f64,
    pub audio_position: f64,
    pub duration: f64,
}

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, state: &ViewState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // URLs + loading notice
                Constraint::Length(3), // Video gauge
                Constraint::Length(3), // Audio gauge
                Constraint::Min(0),    // Skip table + controls
                Constraint::Length(1), // Key help
            ])
            .split(frame.area());

        layout::render_header(frame, chunks[0], state);

        progress::render_stream_gauge(
            frame,
            chunks[1],
            &stream_title("Video", state.video_playing),
            state.video_position,
            state.duration,
            format!("vol {}", volume_label(state.video_volume)),
            Color::Cyan,
        );

        progress::render_stream_gauge(
            frame,
            chunks[2],
            &stream_title("Audio", state.audio_playing),
            state.audio_position,
            state.duration,
            format!(
                "drift {} | vol {}",
                utils::format_drift(state.video_position, state.audio_position),
                volume_label(state.audio_volume)
            ),
            Color::Magenta,
        );

        layout::render_details(frame, chunks[3], state);
        layout::render_help(frame, chunks[4]);
    }
}

fn stream_title(name: &str, playing: bool) -> String {
    if playing {
        format!("▶ {}", name)
    } else {
        format!("⏸  {}", name)
    }
}

fn volume_label(volume: Option<f64>) -> String {
    volume.map_or_else(|| "--".to_string(), utils::format_volume)
}
