//! Error types for avsync
//!
//! The synchronization core never fails outward; these types cover the
//! application edge (configuration) and skip-table diagnostics.

use std::path::PathBuf;

use thiserror::Error;

/// A problem found in a skip table. Tables with problems are still used
/// as-is: the first matching range in declared order wins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipTableError {
    #[error("skip range #{index} is inverted or empty: [{start}, {end})")]
    Inverted { index: usize, start: f64, end: f64 },

    #[error("skip range #{index} starts before the range declared ahead of it")]
    OutOfOrder { index: usize },

    #[error("skip ranges #{first} and #{second} overlap")]
    Overlapping { first: usize, second: usize },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing {0}: set it in the config file or on the command line")]
    Missing(&'static str),
}
