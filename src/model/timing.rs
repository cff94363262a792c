//! Extrapolating media clock

use std::time::Instant;

/// Position of a media element, extrapolated from the last anchor while
/// playing. Positions are seconds and never exceed `duration_secs`.
#[derive(Clone, Debug)]
pub struct MediaClock {
    position_secs: f64,
    last_update: Instant,
    is_playing: bool,
    duration_secs: f64,
    /// Playback rate relative to wall time. Anything other than `1.0` drifts.
    rate: f64,
}

impl MediaClock {
    pub fn new(duration_secs: f64, rate: f64) -> Self {
        Self {
            position_secs: 0.0,
            last_update: Instant::now(),
            is_playing: false,
            duration_secs: duration_secs.max(0.0),
            rate,
        }
    }

    pub fn position_at(&self, now: Instant) -> f64 {
        if self.is_playing {
            let elapsed = now.saturating_duration_since(self.last_update).as_secs_f64();
            (self.position_secs + elapsed * self.rate).min(self.duration_secs)
        } else {
            self.position_secs
        }
    }

    pub fn position(&self) -> f64 {
        self.position_at(Instant::now())
    }

    pub fn duration(&self) -> f64 {
        self.duration_secs
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.duration_secs > 0.0 && self.position_at(now) >= self.duration_secs
    }

    pub fn seek_at(&mut self, position_secs: f64, now: Instant) {
        self.position_secs = position_secs.clamp(0.0, self.duration_secs);
        self.last_update = now;
    }

    pub fn seek(&mut self, position_secs: f64) {
        self.seek_at(position_secs, Instant::now());
    }

    pub fn set_playing_at(&mut self, is_playing: bool, now: Instant) {
        if self.is_playing == is_playing {
            return;
        }
        // Re-anchor so the elapsed time so far is kept.
        self.position_secs = self.position_at(now);
        self.last_update = now;
        self.is_playing = is_playing;
    }

    pub fn set_playing(&mut self, is_playing: bool) {
        self.set_playing_at(is_playing, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn extrapolates_while_playing() {
        let start = Instant::now();
        let mut clock = MediaClock::new(600.0, 1.0);
        clock.seek_at(10.0, start);
        clock.set_playing_at(true, start);

        let later = start + Duration::from_millis(2500);
        assert!((clock.position_at(later) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn freezes_while_paused() {
        let start = Instant::now();
        let mut clock = MediaClock::new(600.0, 1.0);
        clock.set_playing_at(true, start);
        clock.set_playing_at(false, start + Duration::from_secs(3));

        let much_later = start + Duration::from_secs(60);
        assert!((clock.position_at(much_later) - 3.0).abs() < 1e-9);
        assert!(!clock.is_playing());
    }

    #[test]
    fn rate_skew_produces_drift() {
        let start = Instant::now();
        let mut clock = MediaClock::new(600.0, 1.01);
        clock.set_playing_at(true, start);

        let later = start + Duration::from_secs(100);
        assert!((clock.position_at(later) - 101.0).abs() < 1e-6);
    }

    #[test]
    fn position_stops_at_duration() {
        let start = Instant::now();
        let mut clock = MediaClock::new(5.0, 1.0);
        clock.seek_at(4.0, start);
        clock.set_playing_at(true, start);

        let later = start + Duration::from_secs(10);
        assert_eq!(clock.position_at(later), 5.0);
        assert!(clock.is_finished_at(later));
    }

    #[test]
    fn seek_is_clamped_to_media() {
        let mut clock = MediaClock::new(60.0, 1.0);
        clock.seek(-4.0);
        assert_eq!(clock.position(), 0.0);
        clock.seek(90.0);
        assert_eq!(clock.position(), 60.0);
    }
}
