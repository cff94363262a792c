//! Key event handling for the terminal host

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::SyncEvent;

/// Seconds moved per scrub key press.
pub const SCRUB_STEP_SECS: f64 = 5.0;
/// Volume change per key press.
pub const VOLUME_STEP: f64 = 0.05;

/// What the host should do in response to a key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostAction {
    /// Hand the event straight to the controller.
    Dispatch(SyncEvent),
    /// Move the video by this many seconds, as if the user dragged its
    /// scrubber. The video surface reports the result as a seek event.
    Scrub(f64),
    /// Jump the video scrubber to a fraction of the media, `0.0..1.0`.
    ScrubToFraction(f64),
    VideoVolumeStep(f64),
    AudioVolumeStep(f64),
    Quit,
}

pub fn action_for_key(key: KeyEvent) -> Option<HostAction> {
    // Only handle key press events, not release or repeat
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(HostAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(HostAction::Quit)
        }
        KeyCode::Char(' ') => Some(HostAction::Dispatch(SyncEvent::TogglePlayPause)),
        // The video surface's own controls
        KeyCode::Char('p') => Some(HostAction::Dispatch(SyncEvent::VideoPlay)),
        KeyCode::Char('P') => Some(HostAction::Dispatch(SyncEvent::VideoPause)),
        KeyCode::Left => Some(HostAction::Scrub(-SCRUB_STEP_SECS)),
        KeyCode::Right => Some(HostAction::Scrub(SCRUB_STEP_SECS)),
        KeyCode::Char(c @ '0'..='9') => {
            let tenths = c.to_digit(10).unwrap_or_default();
            Some(HostAction::ScrubToFraction(f64::from(tenths) / 10.0))
        }
        KeyCode::Char('[') => Some(HostAction::VideoVolumeStep(-VOLUME_STEP)),
        KeyCode::Char(']') => Some(HostAction::VideoVolumeStep(VOLUME_STEP)),
        KeyCode::Char('{') => Some(HostAction::AudioVolumeStep(-VOLUME_STEP)),
        KeyCode::Char('}') => Some(HostAction::AudioVolumeStep(VOLUME_STEP)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn space_toggles_playback() {
        assert_eq!(
            action_for_key(press(KeyCode::Char(' '))),
            Some(HostAction::Dispatch(SyncEvent::TogglePlayPause))
        );
    }

    #[test]
    fn arrows_scrub_the_video() {
        assert_eq!(action_for_key(press(KeyCode::Left)), Some(HostAction::Scrub(-5.0)));
        assert_eq!(action_for_key(press(KeyCode::Right)), Some(HostAction::Scrub(5.0)));
    }

    #[test]
    fn digits_jump_to_tenths() {
        assert_eq!(
            action_for_key(press(KeyCode::Char('0'))),
            Some(HostAction::ScrubToFraction(0.0))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('7'))),
            Some(HostAction::ScrubToFraction(0.7))
        );
    }

    #[test]
    fn brackets_step_volumes() {
        assert_eq!(
            action_for_key(press(KeyCode::Char(']'))),
            Some(HostAction::VideoVolumeStep(VOLUME_STEP))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('{'))),
            Some(HostAction::AudioVolumeStep(-VOLUME_STEP))
        );
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for_key(release), None);
        assert_eq!(action_for_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(action_for_key(press(KeyCode::Char('q'))), Some(HostAction::Quit));
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(HostAction::Quit)
        );
    }
}
