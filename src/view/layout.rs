//! Layout rendering (header, skip table, controls, help line)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

use super::utils::{format_duration, format_volume};
use super::ViewState;

pub fn render_header(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Video: ", Style::default().fg(Color::Cyan)),
            Span::raw(state.video_url),
        ]),
        Line::from(vec![
            Span::styled("Audio: ", Style::default().fg(Color::Magenta)),
            Span::raw(state.audio_url),
        ]),
    ];

    let readiness = state.status.readiness;
    if readiness.is_loading() {
        let mark = |ready: bool| if ready { "ready" } else { "buffering" };
        lines.push(Line::styled(
            format!(
                "Loading video and audio... (video {}, audio {})",
                mark(readiness.video_ready()),
                mark(readiness.audio_ready())
            ),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" avsync ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(header, area);
}

pub fn render_details(frame: &mut Frame, area: Rect, state: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Skip table
            Constraint::Percentage(50), // Controls
        ])
        .split(area);

    render_skip_table(frame, chunks[0], state);
    render_controls(frame, chunks[1], state);
}

fn render_skip_table(frame: &mut Frame, area: Rect, state: &ViewState) {
    let items: Vec<ListItem> = if state.skip_ranges.is_empty() {
        vec![ListItem::new("No skip ranges").style(Style::default().fg(Color::DarkGray))]
    } else {
        state
            .skip_ranges
            .iter()
            .map(|range| {
                let style = if state.video_position >= range.end {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(format!(
                    "{} -> {}",
                    format_duration(range.start),
                    format_duration(range.end)
                ))
                .style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Skip ranges ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);
}

fn render_controls(frame: &mut Frame, area: Rect, state: &ViewState) {
    let status = &state.status;
    let button_style = if status.is_loading() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("[space] "),
            Span::styled(status.playback.button_label(), button_style),
        ]),
        Line::from(format!("Video volume  {}", format_volume(status.volume.video))),
        Line::from(format!("Audio volume  {}", format_volume(status.volume.audio))),
        Line::from(format!("Skips taken   {}", status.skips_performed)),
    ];

    let controls = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Controls ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(controls, area);
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        " space play/pause  p/P video play/pause  ←/→ seek  0-9 jump  [/] video vol  {/} audio vol  q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
