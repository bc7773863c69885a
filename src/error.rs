//! Error types for configuration and chart output
//!
//! The statistics themselves cannot fail; only reading the config file and
//! writing the chart can.

use std::path::{Path, PathBuf};

/// Result type for radar operations
pub type RadarResult<T> = Result<T, RadarError>;

#[derive(Debug, thiserror::Error)]
pub enum RadarError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Chart has no traces to render")]
    EmptyChart,
}

/// Attach a path to an IO error
pub fn io_error(path: impl AsRef<Path>, source: std::io::Error) -> RadarError {
    RadarError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    }
}

impl From<toml::de::Error> for RadarError {
    fn from(e: toml::de::Error) -> Self {
        RadarError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for RadarError {
    fn from(e: serde_json::Error) -> Self {
        RadarError::Serialization(e.to_string())
    }
}
