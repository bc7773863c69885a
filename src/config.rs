//! Run configuration
//!
//! The tool takes no arguments. An optional `radar.toml` in the working
//! directory can override the output path, chart title and log filter.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::chart::{CONFIG_FILE, DEFAULT_OUTPUT, DEFAULT_TITLE};
use crate::error::{io_error, RadarResult};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Chart file to write
    pub output: PathBuf,

    /// Chart title
    pub title: String,

    /// Default `env_logger` filter, `RUST_LOG` still wins
    pub log_filter: String,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl RadarConfig {
    /// Parse a TOML config file
    pub fn load(path: impl AsRef<Path>) -> RadarResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> RadarResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load `radar.toml` from `dir` if present, defaults otherwise
    pub fn discover_in(dir: impl AsRef<Path>) -> RadarResult<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load `radar.toml` from the working directory if present
    pub fn discover() -> RadarResult<Self> {
        Self::discover_in(".")
    }
}
