//! Controller module - Synchronization logic and event handling
//!
//! This module contains the sync controller that keeps a follower audio
//! stream aligned to a leader video stream. It is organized into submodules
//! by responsibility:
//!
//! - `events`: The event contract and the single reducer that applies it
//! - `playback`: Play/pause state machine and volume commands
//! - `input`: Key event mapping for the terminal host

mod events;
mod playback;
mod input;

pub use events::SyncEvent;
pub use input::{action_for_key, HostAction};

use crate::model::{PlaybackState, Readiness, SeekUnit, SkipTable, VolumeSetting};

/// The video capability. Video is the clock leader.
pub trait VideoSource {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
    fn seek_to(&mut self, time: f64, unit: SeekUnit);
    fn set_volume(&mut self, volume: f64);
}

/// The audio capability. Audio follows whatever position it is pointed at.
pub trait AudioSource {
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, time: f64);
    fn play(&mut self);
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f64);
}

/// Construction parameters for [`SyncController`].
#[derive(Clone, Debug, Default)]
pub struct SyncConfig {
    pub video_url: String,
    pub audio_url: String,
    pub skip_table: SkipTable,
}

/// Snapshot of controller state for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyncStatus {
    pub playback: PlaybackState,
    pub readiness: Readiness,
    pub volume: VolumeSetting,
    /// Last position reported by (or commanded to) the video.
    pub video_position: f64,
    pub skips_performed: u64,
}

impl SyncStatus {
    pub fn is_loading(&self) -> bool {
        self.readiness.is_loading()
    }
}

/// Keeps the audio stream aligned to the video stream.
///
/// All state lives here and is mutated only through [`SyncController::dispatch`]
/// (or the handler methods it calls), one event at a time. Either capability
/// may be absent; commands aimed at a missing capability are dropped.
pub struct SyncController<V, A> {
    config: SyncConfig,
    video: Option<V>,
    audio: Option<A>,
    playback: PlaybackState,
    readiness: Readiness,
    volume: VolumeSetting,
    video_position: f64,
    skips_performed: u64,
}

impl<V: VideoSource, A: AudioSource> SyncController<V, A> {
    pub fn new(config: SyncConfig) -> Self {
        tracing::debug!(
            video_url = %config.video_url,
            audio_url = %config.audio_url,
            skip_ranges = config.skip_table.len(),
            "Creating sync controller"
        );
        Self {
            config,
            video: None,
            audio: None,
            playback: PlaybackState::default(),
            readiness: Readiness::default(),
            volume: VolumeSetting::default(),
            video_position: 0.0,
            skips_performed: 0,
        }
    }

    /// Mounts the video capability and applies the current video volume.
    pub fn attach_video(&mut self, mut video: V) {
        video.set_volume(self.volume.video);
        self.video = Some(video);
        tracing::debug!("Video source attached");
    }

    /// Mounts the audio capability and applies the current audio volume.
    pub fn attach_audio(&mut self, mut audio: A) {
        audio.set_volume(self.volume.audio);
        self.audio = Some(audio);
        tracing::debug!("Audio source attached");
    }

    pub fn detach_video(&mut self) -> Option<V> {
        tracing::debug!("Video source detached");
        self.video.take()
    }

    pub fn detach_audio(&mut self) -> Option<A> {
        tracing::debug!("Audio source detached");
        self.audio.take()
    }

    pub fn video(&self) -> Option<&V> {
        self.video.as_ref()
    }

    pub fn video_mut(&mut self) -> Option<&mut V> {
        self.video.as_mut()
    }

    pub fn audio(&self) -> Option<&A> {
        self.audio.as_ref()
    }

    pub fn audio_mut(&mut self) -> Option<&mut A> {
        self.audio.as_mut()
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn skip_table(&self) -> &SkipTable {
        &self.config.skip_table
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_loading(&self) -> bool {
        self.readiness.is_loading()
    }

    pub fn volume(&self) -> VolumeSetting {
        self.volume
    }

    pub fn status(&self) -> SyncStatus {
        SyncStatus {
            playback: self.playback,
            readiness: self.readiness,
            volume: self.volume,
            video_position: self.video_position,
            skips_performed: self.skips_performed,
        }
    }

    /// Points the audio timeline at `time`, if audio is mounted.
    fn align_audio(&mut self, time: f64) {
        match self.audio.as_mut() {
            Some(audio) => {
                audio.set_current_time(time);
                crate::log_command!("audio", "set_current_time", time);
            }
            None => crate::log_missing!("audio", "set_current_time"),
        }
    }

    /// Seeks the video to `time` seconds, if video is mounted.
    fn seek_video(&mut self, time: f64) {
        self.video_position = time;
        match self.video.as_mut() {
            Some(video) => {
                video.seek_to(time, SeekUnit::Seconds);
                crate::log_command!("video", "seek_to", time);
            }
            None => crate::log_missing!("video", "seek_to"),
        }
    }
}
