//! Model module - Synchronization state and data types
//!
//! It is organized into submodules by responsibility:
//!
//! - `types`: Playback state, readiness, volumes, seek units
//! - `skip`: Skip ranges and the skip resolver
//! - `timing`: Extrapolating clock used by the simulated media sources

mod types;
mod skip;
mod timing;

pub use types::{clamp_volume, PlaybackState, Readiness, SeekUnit, VolumeSetting};

pub use skip::{SkipRange, SkipTable};

pub use timing::MediaClock;
