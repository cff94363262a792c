//! Simulated audio element

use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use crate::config::SimulationConfig;
use crate::controller::{AudioSource, SyncEvent};
use crate::model::MediaClock;

/// Audio element stand-in. Its clock runs at a configurable rate so it
/// drifts away from the video between resyncs.
pub struct SimulatedAudio {
    url: String,
    clock: MediaClock,
    volume: f64,
    created: Instant,
    load_delay: Duration,
    loaded: bool,
    events: UnboundedSender<SyncEvent>,
}

impl SimulatedAudio {
    pub fn new(url: String, sim: &SimulationConfig, events: UnboundedSender<SyncEvent>) -> Self {
        Self {
            url,
            clock: MediaClock::new(sim.media_duration_secs, sim.audio_rate),
            volume: 0.0,
            created: Instant::now(),
            load_delay: Duration::from_millis(sim.audio_load_delay_ms),
            loaded: false,
            events,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.loaded || now.saturating_duration_since(self.created) < self.load_delay {
            return;
        }
        self.loaded = true;
        tracing::debug!(url = %self.url, "Simulated audio loaded");
        if self.events.send(SyncEvent::AudioLoaded).is_err() {
            tracing::debug!("Event channel closed, audio event dropped");
        }
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }
}

impl AudioSource for SimulatedAudio {
    fn current_time(&self) -> f64 {
        self.clock.position()
    }

    fn set_current_time(&mut self, time: f64) {
        self.clock.seek(time);
    }

    fn play(&mut self) {
        self.clock.set_playing(true);
    }

    fn pause(&mut self) {
        self.clock.set_playing(false);
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }
}
