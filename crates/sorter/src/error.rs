//! Error types for the sorting pipeline.

use std::path::PathBuf;

use sorter_prob::ProbError;
use thiserror::Error;

/// Errors that can occur while configuring or running the sorter.
#[derive(Debug, Error)]
pub enum SorterError {
    /// A probability table, reading or belief was rejected.
    #[error(transparent)]
    Prob(#[from] ProbError),

    /// The configuration file couldn't be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration isn't valid TOML for [`SorterConfig`](crate::SorterConfig).
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration couldn't be written out.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
