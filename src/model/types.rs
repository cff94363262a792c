//! Core type definitions for the synchronization state

/// User-facing playback state. Changed only by explicit play/pause actions,
/// never by buffering or readiness events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        self == PlaybackState::Playing
    }

    pub fn toggled(self) -> Self {
        match self {
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Playing => PlaybackState::Paused,
        }
    }

    /// Label for the play/pause button: the action a press would take.
    pub fn button_label(self) -> &'static str {
        match self {
            PlaybackState::Paused => "Play",
            PlaybackState::Playing => "Pause",
        }
    }
}

/// One-way readiness flags for the two streams.
///
/// Each flag goes from `false` to `true` exactly once per session and is never
/// reset. The "both must be ready" rule lives in [`Readiness::is_loading`] and
/// nowhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Readiness {
    video_ready: bool,
    audio_ready: bool,
}

impl Readiness {
    /// Marks the video as ready. Returns `true` if this call changed the flag.
    pub fn mark_video_ready(&mut self) -> bool {
        !std::mem::replace(&mut self.video_ready, true)
    }

    /// Marks the audio as ready. Returns `true` if this call changed the flag.
    pub fn mark_audio_ready(&mut self) -> bool {
        !std::mem::replace(&mut self.audio_ready, true)
    }

    pub fn video_ready(&self) -> bool {
        self.video_ready
    }

    pub fn audio_ready(&self) -> bool {
        self.audio_ready
    }

    pub fn is_loading(&self) -> bool {
        !(self.video_ready && self.audio_ready)
    }
}

pub const DEFAULT_VOLUME: f64 = 0.8;

/// Independent volume for each stream, each within `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeSetting {
    pub video: f64,
    pub audio: f64,
}

impl Default for VolumeSetting {
    fn default() -> Self {
        Self {
            video: DEFAULT_VOLUME,
            audio: DEFAULT_VOLUME,
        }
    }
}

/// Clamps a requested volume into `[0.0, 1.0]`. NaN has no meaningful
/// position on a slider and yields `None`.
pub fn clamp_volume(volume: f64) -> Option<f64> {
    if volume.is_nan() {
        None
    } else {
        Some(volume.clamp(0.0, 1.0))
    }
}

/// Unit of a video seek target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeekUnit {
    Seconds,
    /// Fraction of the total media duration, `0.0..=1.0`.
    Fraction,
}
