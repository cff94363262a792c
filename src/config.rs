//! Configuration: JSON config file layered under command-line arguments

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;

use crate::controller::SyncConfig;
use crate::error::ConfigError;
use crate::model::{SkipRange, SkipTable};

/// Command-line arguments for avsync
#[derive(Parser, Debug)]
#[command(name = "avsync")]
#[command(about = "Plays a video and a separate audio track in lockstep, skipping configured ranges")]
#[command(version)]
pub struct Args {
    /// JSON config file
    #[arg(short, long, env = "AVSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Video stream locator
    #[arg(long, env = "AVSYNC_VIDEO_URL")]
    pub video_url: Option<String>,

    /// Audio stream locator
    #[arg(long, env = "AVSYNC_AUDIO_URL")]
    pub audio_url: Option<String>,

    /// Range to skip in both streams, in seconds. Repeatable; replaces the
    /// config file's ranges when given.
    #[arg(long = "skip", value_name = "START:END")]
    pub skip: Vec<SkipRange>,

    /// Directory for log files
    #[arg(long, default_value = ".logs", env = "AVSYNC_LOG_DIR")]
    pub log_dir: PathBuf,
}

/// Settings for the simulated media sources that stand in for real players.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub media_duration_secs: f64,
    pub video_load_delay_ms: u64,
    pub audio_load_delay_ms: u64,
    /// How often the video reports progress.
    pub progress_interval_ms: u64,
    /// Audio clock rate relative to the video. Values other than 1.0 drift.
    pub audio_rate: f64,
    /// Log a warning once if still loading after this long. 0 disables.
    pub loading_warn_secs: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            media_duration_secs: 600.0,
            video_load_delay_ms: 1500,
            audio_load_delay_ms: 800,
            progress_interval_ms: 250,
            audio_rate: 1.004,
            loading_warn_secs: 15,
        }
    }
}

impl SimulationConfig {
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms.max(10))
    }

    pub fn loading_warn_after(&self) -> Option<Duration> {
        (self.loading_warn_secs > 0).then(|| Duration::from_secs(self.loading_warn_secs))
    }
}

/// On-disk config file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub skip_ranges: SkipTable,
    pub simulation: SimulationConfig,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub sync: SyncConfig,
    pub simulation: SimulationConfig,
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading config file");
                FileConfig::from_path(path)?
            }
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    fn merge(args: &Args, file: FileConfig) -> Result<Self, ConfigError> {
        let video_url = args
            .video_url
            .clone()
            .or(file.video_url)
            .ok_or(ConfigError::Missing("video URL"))?;
        let audio_url = args
            .audio_url
            .clone()
            .or(file.audio_url)
            .ok_or(ConfigError::Missing("audio URL"))?;

        let skip_table = if args.skip.is_empty() {
            file.skip_ranges
        } else {
            SkipTable::new(args.skip.clone())
        };

        // Problems are reported, not fixed: first match in declared order wins.
        for problem in skip_table.validate() {
            tracing::warn!(%problem, "Malformed skip table");
        }

        Ok(Self {
            sync: SyncConfig {
                video_url,
                audio_url,
                skip_table,
            },
            simulation: file.simulation,
        })
    }
}
