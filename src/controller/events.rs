//! Input events and the reducer that applies them

use super::{AudioSource, SyncController, VideoSource};

/// Every input the controller reacts to. Host callbacks (readiness,
/// progress, seek, play/pause) and user input arrive as one of these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncEvent {
    VideoReady,
    AudioLoaded,
    VideoProgress { played_seconds: f64 },
    VideoSeek { seconds: f64 },
    /// The video surface's own play control.
    VideoPlay,
    /// The video surface's own pause control.
    VideoPause,
    /// The play/pause button.
    TogglePlayPause,
    SetVideoVolume(f64),
    SetAudioVolume(f64),
}

impl<V: VideoSource, A: AudioSource> SyncController<V, A> {
    /// Applies one event. Handlers run to completion before the next event
    /// is dispatched.
    pub fn dispatch(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::VideoReady => self.on_video_ready(),
            SyncEvent::AudioLoaded => self.on_audio_ready(),
            SyncEvent::VideoProgress { played_seconds } => self.on_video_progress(played_seconds),
            SyncEvent::VideoSeek { seconds } => self.on_video_seek(seconds),
            SyncEvent::VideoPlay => self.play(),
            SyncEvent::VideoPause => self.pause(),
            SyncEvent::TogglePlayPause => self.toggle_play_pause(),
            SyncEvent::SetVideoVolume(volume) => self.set_video_volume(volume),
            SyncEvent::SetAudioVolume(volume) => self.set_audio_volume(volume),
        }
    }

    pub fn on_video_ready(&mut self) {
        if self.readiness.mark_video_ready() {
            tracing::info!(loading = self.readiness.is_loading(), "Video ready");
        }
    }

    pub fn on_audio_ready(&mut self) {
        if self.readiness.mark_audio_ready() {
            tracing::info!(loading = self.readiness.is_loading(), "Audio ready");
        }
    }

    /// Periodic progress report from the video. Ignored unless playing.
    pub fn on_video_progress(&mut self, played_seconds: f64) {
        if !self.playback.is_playing() {
            tracing::trace!(played_seconds, "Progress while paused ignored");
            return;
        }

        self.video_position = played_seconds;
        match self.config.skip_table.resolve_landing(played_seconds) {
            Some(skip_to) => {
                tracing::info!(from = played_seconds, to = skip_to, "Skipping range");
                self.skips_performed += 1;
                self.seek_video(skip_to);
                self.align_audio(skip_to);
            }
            None => self.align_audio(played_seconds),
        }
    }

    /// The user scrubbed the video. Applies in any playback state so audio is
    /// already aligned when playback resumes.
    pub fn on_video_seek(&mut self, seconds: f64) {
        let target = match self.config.skip_table.resolve_landing(seconds) {
            Some(skip_to) => {
                tracing::info!(requested = seconds, redirected = skip_to, "Seek redirected out of skip range");
                self.skips_performed += 1;
                self.seek_video(skip_to);
                skip_to
            }
            None => {
                tracing::debug!(seconds, "Seek");
                self.video_position = seconds;
                seconds
            }
        };
        self.align_audio(target);
    }
}
