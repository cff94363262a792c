//! Play/pause state machine and volume commands

use crate::model::{clamp_volume, PlaybackState};

use super::{AudioSource, SyncController, VideoSource};

impl<V: VideoSource, A: AudioSource> SyncController<V, A> {
    /// The play/pause button. No-op while either stream is still loading.
    pub fn toggle_play_pause(&mut self) {
        if self.readiness.is_loading() {
            tracing::debug!(readiness = ?self.readiness, "Toggle rejected while loading");
            return;
        }
        self.transition(self.playback.toggled());
    }

    /// Forces the Playing state, e.g. from the video surface's own controls.
    /// Rejected while loading.
    pub fn play(&mut self) {
        if self.readiness.is_loading() {
            tracing::debug!(readiness = ?self.readiness, "Play rejected while loading");
            return;
        }
        self.transition(PlaybackState::Playing);
    }

    /// Forces the Paused state.
    pub fn pause(&mut self) {
        self.transition(PlaybackState::Paused);
    }

    fn transition(&mut self, next: PlaybackState) {
        if self.playback == next {
            return;
        }
        tracing::debug!(from = ?self.playback, to = ?next, "Playback state change");
        self.playback = next;

        match next {
            PlaybackState::Playing => self.start_audio(),
            PlaybackState::Paused => self.stop_audio(),
        }
    }

    /// Aligns audio to the video's position, then starts it. The order
    /// matters: playing first would be audible at the stale position.
    fn start_audio(&mut self) {
        let (video, audio) = match (self.video.as_ref(), self.audio.as_mut()) {
            (Some(video), Some(audio)) => (video, audio),
            (None, _) => {
                crate::log_missing!("video", "current_time");
                return;
            }
            (Some(_), None) => {
                crate::log_missing!("audio", "play");
                return;
            }
        };
        let position = video.current_time();
        self.video_position = position;
        audio.set_current_time(position);
        audio.play();
        crate::log_command!("audio", "play", position);
    }

    fn stop_audio(&mut self) {
        match self.audio.as_mut() {
            Some(audio) => {
                audio.pause();
                crate::log_command!("audio", "pause", audio.current_time());
            }
            None => crate::log_missing!("audio", "pause"),
        }
    }

    pub fn set_video_volume(&mut self, volume: f64) {
        let Some(volume) = clamp_volume(volume) else {
            tracing::warn!("Ignoring NaN video volume");
            return;
        };
        self.volume.video = volume;
        match self.video.as_mut() {
            Some(video) => video.set_volume(volume),
            None => crate::log_missing!("video", "set_volume"),
        }
    }

    pub fn set_audio_volume(&mut self, volume: f64) {
        let Some(volume) = clamp_volume(volume) else {
            tracing::warn!("Ignoring NaN audio volume");
            return;
        };
        self.volume.audio = volume;
        match self.audio.as_mut() {
            Some(audio) => audio.set_volume(volume),
            None => crate::log_missing!("audio", "set_volume"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::super::{SyncConfig, SyncEvent};
    use super::*;

    #[test]
    fn toggle_is_gated_until_both_streams_are_ready() {
        let (mut controller, log) = controller(vec![]);

        controller.toggle_play_pause();
        assert_eq!(controller.playback_state(), PlaybackState::Paused);

        controller.on_audio_ready();
        controller.toggle_play_pause();
        assert_eq!(controller.playback_state(), PlaybackState::Paused);

        controller.on_audio_ready();
        controller.toggle_play_pause();
        assert_eq!(controller.playback_state(), PlaybackState::Paused);
        assert!(take(&log).is_empty());

        controller.on_video_ready();
        controller.toggle_play_pause();
        assert_eq!(controller.playback_state(), PlaybackState::Playing);
    }

    #[test]
    fn stream_that_never_loads_keeps_play_rejected() {
        // No timeout exists: a stream that never signals keeps the gate shut.
        let (mut controller, log) = controller(vec![]);
        controller.on_video_ready();

        for _ in 0..100 {
            controller.toggle_play_pause();
            controller.play();
        }

        assert!(controller.is_loading());
        assert_eq!(controller.playback_state(), PlaybackState::Paused);
        assert!(take(&log).is_empty());
    }

    #[test]
    fn entering_playing_aligns_audio_before_play() {
        let (mut controller, log) = ready_controller(vec![]);
        if let Some(video) = controller.video_mut() {
            video.position = 37.25;
        }

        controller.toggle_play_pause();

        assert_eq!(take(&log), vec![Command::AudioTime(37.25), Command::AudioPlay]);
        assert_eq!(controller.audio().map(|a| a.position), Some(37.25));
        assert_eq!(controller.audio().map(|a| a.playing), Some(true));
        assert_eq!(controller.status().video_position, 37.25);
    }

    #[test]
    fn entering_paused_pauses_audio_only() {
        let (mut controller, log) = ready_controller(vec![]);
        controller.toggle_play_pause();
        take(&log);

        controller.toggle_play_pause();

        assert_eq!(take(&log), vec![Command::AudioPause]);
        assert_eq!(controller.playback_state(), PlaybackState::Paused);
        assert_eq!(controller.audio().map(|a| a.playing), Some(false));
    }

    #[test]
    fn play_and_pause_are_idempotent_setters() {
        let (mut controller, log) = ready_controller(vec![]);

        controller.play();
        controller.play();
        assert_eq!(controller.playback_state(), PlaybackState::Playing);
        assert_eq!(take(&log), vec![Command::AudioTime(0.0), Command::AudioPlay]);

        controller.pause();
        controller.pause();
        assert_eq!(controller.playback_state(), PlaybackState::Paused);
        assert_eq!(take(&log), vec![Command::AudioPause]);
    }

    #[test]
    fn play_is_rejected_while_loading() {
        let (mut controller, log) = controller(vec![]);
        controller.on_audio_ready();

        controller.dispatch(SyncEvent::VideoPlay);

        assert_eq!(controller.playback_state(), PlaybackState::Paused);
        assert!(take(&log).is_empty());
    }

    #[test]
    fn setting_audio_volume_twice_is_idempotent() {
        let (mut controller, log) = controller(vec![]);
        controller.on_video_ready();
        let before = controller.status();

        controller.set_audio_volume(0.3);
        controller.set_audio_volume(0.3);

        assert_eq!(controller.audio().map(|a| a.volume), Some(0.3));
        assert_eq!(controller.volume().audio, 0.3);
        assert_eq!(controller.playback_state(), before.playback);
        assert_eq!(controller.status().readiness, before.readiness);
        assert_eq!(
            take(&log),
            vec![Command::AudioVolume(0.3), Command::AudioVolume(0.3)]
        );
    }

    #[test]
    fn volumes_are_independent_and_clamped() {
        let (mut controller, log) = ready_controller(vec![]);

        controller.dispatch(SyncEvent::SetVideoVolume(1.5));
        controller.dispatch(SyncEvent::SetAudioVolume(-1.0));
        controller.dispatch(SyncEvent::SetAudioVolume(f64::NAN));

        assert_eq!(controller.video().map(|v| v.volume), Some(1.0));
        assert_eq!(controller.audio().map(|a| a.volume), Some(0.0));
        assert_eq!(
            take(&log),
            vec![Command::VideoVolume(1.0), Command::AudioVolume(0.0)]
        );
    }

    #[test]
    fn missing_sources_turn_commands_into_no_ops() {
        let mut controller = TestController::new(SyncConfig {
            skip_table: vec![(120.0, 180.0)].into(),
            ..SyncConfig::default()
        });
        controller.on_video_ready();
        controller.on_audio_ready();

        controller.toggle_play_pause();
        controller.on_video_progress(150.0);
        controller.on_video_seek(160.0);
        controller.set_audio_volume(0.1);
        controller.set_video_volume(0.2);
        controller.toggle_play_pause();

        assert_eq!(controller.playback_state(), PlaybackState::Paused);
        assert_eq!(controller.volume().audio, 0.1);
        assert_eq!(controller.volume().video, 0.2);
    }

    #[test]
    fn missing_video_leaves_attached_audio_untouched() {
        let (mut controller, log) = ready_controller(vec![]);
        controller.detach_video();

        controller.toggle_play_pause();

        assert_eq!(controller.playback_state(), PlaybackState::Playing);
        assert!(take(&log).is_empty());
        assert_eq!(controller.audio().map(|a| a.playing), Some(false));
    }

    #[test]
    fn missing_audio_still_seeks_video_out_of_skip_range() {
        let (mut controller, log) = ready_controller(vec![(120.0, 180.0)]);
        controller.detach_audio();

        controller.on_video_seek(130.0);

        assert_eq!(take(&log), vec![Command::VideoSeek(180.0, crate::model::SeekUnit::Seconds)]);
    }
}
