//! Media module - Simulated sources implementing the controller's capabilities
//!
//! - `video`: Video surface with readiness, progress and scrub events
//! - `audio`: Audio element with a drifting clock

mod video;
mod audio;

pub use video::SimulatedVideo;
pub use audio::SimulatedAudio;
