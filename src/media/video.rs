//! Simulated video surface

use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use crate::config::SimulationConfig;
use crate::controller::{SyncEvent, VideoSource};
use crate::model::{MediaClock, SeekUnit};

/// Video player stand-in. Becomes ready after a load delay, reports progress
/// at a fixed cadence while playing and reports user scrubs as seek events.
pub struct SimulatedVideo {
    url: String,
    clock: MediaClock,
    volume: f64,
    created: Instant,
    load_delay: Duration,
    ready: bool,
    progress_interval: Duration,
    last_progress: Option<Instant>,
    events: UnboundedSender<SyncEvent>,
}

impl SimulatedVideo {
    pub fn new(url: String, sim: &SimulationConfig, events: UnboundedSender<SyncEvent>) -> Self {
        Self {
            url,
            clock: MediaClock::new(sim.media_duration_secs, 1.0),
            volume: 0.0,
            created: Instant::now(),
            load_delay: Duration::from_millis(sim.video_load_delay_ms),
            ready: false,
            progress_interval: sim.progress_interval(),
            last_progress: None,
            events,
        }
    }

    /// Advances the surface to `now`, emitting whatever events are due.
    pub fn tick(&mut self, now: Instant) {
        if !self.ready && now.saturating_duration_since(self.created) >= self.load_delay {
            self.ready = true;
            tracing::debug!(url = %self.url, "Simulated video buffered");
            self.emit(SyncEvent::VideoReady);
        }

        if !self.clock.is_playing() {
            return;
        }

        let due = self
            .last_progress
            .map_or(true, |last| now.saturating_duration_since(last) >= self.progress_interval);
        if due {
            self.last_progress = Some(now);
            self.emit(SyncEvent::VideoProgress {
                played_seconds: self.clock.position_at(now),
            });
        }

        if self.clock.is_finished_at(now) {
            tracing::info!("Simulated video reached end of media");
            self.clock.set_playing_at(false, now);
            self.emit(SyncEvent::VideoPause);
        }
    }

    /// Mirrors the controller's playback state onto the surface.
    pub fn set_playing(&mut self, playing: bool) {
        if playing && !self.ready {
            return;
        }
        if playing != self.clock.is_playing() {
            self.last_progress = None;
        }
        self.clock.set_playing(playing);
    }

    /// Moves the playhead the way a user dragging the scrubber would, then
    /// reports the new position.
    pub fn scrub_to(&mut self, time: f64, unit: SeekUnit) {
        let target = self.to_seconds(time, unit).clamp(0.0, self.clock.duration());
        self.clock.seek(target);
        self.emit(SyncEvent::VideoSeek { seconds: target });
    }

    pub fn scrub(&mut self, delta_secs: f64) {
        self.scrub_to(self.clock.position() + delta_secs, SeekUnit::Seconds);
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn duration(&self) -> f64 {
        self.clock.duration()
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    fn to_seconds(&self, time: f64, unit: SeekUnit) -> f64 {
        match unit {
            SeekUnit::Seconds => time,
            SeekUnit::Fraction => time * self.clock.duration(),
        }
    }

    fn emit(&self, event: SyncEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!(?event, "Event channel closed, video event dropped");
        }
    }
}

impl VideoSource for SimulatedVideo {
    fn current_time(&self) -> f64 {
        self.clock.position()
    }

    fn seek_to(&mut self, time: f64, unit: SeekUnit) {
        self.clock.seek(self.to_seconds(time, unit));
        // Report from the new position on the next tick.
        self.last_progress = None;
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    fn drain(rx: &mut UnboundedReceiver<SyncEvent>) -> Vec<SyncEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn video() -> (SimulatedVideo, UnboundedReceiver<SyncEvent>) {
        let (tx, rx) = unbounded_channel();
        let sim = SimulationConfig {
            video_load_delay_ms: 1000,
            ..SimulationConfig::default()
        };
        (SimulatedVideo::new("https://video.example".to_string(), &sim, tx), rx)
    }

    #[test]
    fn signals_ready_once_after_load_delay() {
        let (mut video, mut rx) = video();
        let later = Instant::now() + Duration::from_secs(2);

        video.tick(later);
        video.tick(later);

        assert_eq!(drain(&mut rx), vec![SyncEvent::VideoReady]);
    }

    #[test]
    fn does_not_play_before_ready() {
        let (mut video, _rx) = video();
        video.set_playing(true);
        assert!(!video.is_playing());
    }

    #[test]
    fn reports_progress_only_while_playing() {
        let (mut video, mut rx) = video();
        let later = Instant::now() + Duration::from_secs(2);
        video.tick(later);
        drain(&mut rx);

        video.tick(later + Duration::from_secs(1));
        assert!(drain(&mut rx).is_empty());

        video.set_playing(true);
        video.tick(Instant::now());
        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], SyncEvent::VideoProgress { .. }));
    }

    #[test]
    fn scrub_reports_a_seek() {
        let (mut video, mut rx) = video();
        video.seek_to(100.0, SeekUnit::Seconds);

        video.scrub(-5.0);

        assert_eq!(drain(&mut rx), vec![SyncEvent::VideoSeek { seconds: 95.0 }]);
    }

    #[test]
    fn scrub_is_clamped_to_media() {
        let (mut video, mut rx) = video();
        video.scrub(-5.0);
        assert_eq!(drain(&mut rx), vec![SyncEvent::VideoSeek { seconds: 0.0 }]);
    }

    #[test]
    fn fractional_scrub_reports_seconds() {
        let (mut video, mut rx) = video();
        video.scrub_to(0.1, SeekUnit::Fraction);
        assert_eq!(drain(&mut rx), vec![SyncEvent::VideoSeek { seconds: 60.0 }]);
    }

    #[test]
    fn fractional_seek_uses_duration() {
        let (mut video, _rx) = video();
        video.seek_to(0.5, SeekUnit::Fraction);
        assert_eq!(video.current_time(), 300.0);
    }
}
