//! Utility functions for rendering UI components

pub fn format_duration(seconds: f64) -> String {
    let total_seconds = seconds.max(0.0) as u64;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Signed audio-minus-video offset in milliseconds.
pub fn format_drift(video_secs: f64, audio_secs: f64) -> String {
    let drift_ms = ((audio_secs - video_secs) * 1000.0).round() as i64;
    format!("{:+} ms", drift_ms)
}

pub fn format_volume(volume: f64) -> String {
    format!("{:>3}%", (volume * 100.0).round() as u32)
}
