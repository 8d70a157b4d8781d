//! Configuration file management.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wastesync_types::TimeRange;

/// Errors loading or saving the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Start with the remote API treated as unreachable
    #[serde(default)]
    pub offline: bool,

    /// Cache database path (defaults to the platform data directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Remote call timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_timeout_secs: Option<u64>,

    /// Default dashboard time range (24h, 7d, 30d, 90d)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_range: Option<String>,

    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,
}

/// Remote timeout used when neither the config nor a flag sets one.
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;

impl Config {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wastesync")
            .join("config.toml")
    }

    /// Load config from `path`, or from the default location.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(Self::default_path, Path::to_path_buf);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to `path`
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check every field, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.remote_timeout_secs == Some(0) {
            problems.push("remote_timeout_secs must be > 0".to_string());
        }
        if let Some(range) = &self.default_range
            && let Err(e) = range.parse::<TimeRange>()
        {
            problems.push(format!("default_range: {}", e));
        }
        if self
            .db_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            problems.push("db_path must not be empty".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }

    /// Remote timeout from the config, or the default.
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(
            self.remote_timeout_secs
                .unwrap_or(DEFAULT_REMOTE_TIMEOUT_SECS),
        )
    }

    /// Resolve the time range: an explicit flag wins over the config.
    pub fn resolve_range(&self, flag: Option<TimeRange>) -> TimeRange {
        flag.or_else(|| {
            self.default_range
                .as_deref()
                .and_then(|r| r.parse().ok())
        })
        .unwrap_or_default()
    }

    /// Resolve the database path: an explicit flag wins over the config.
    pub fn resolve_db_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.db_path.clone())
            .unwrap_or_else(wastesync_store::default_db_path)
    }
}
