//! User configuration
//!
//! Read from `$WEIGH_CONFIG` when set, otherwise from `config.yaml` in the
//! platform config directory. Every key is optional.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::assets::CacheManifest;
use crate::core::format::OutputFormat;
use crate::core::unit::Unit;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "WEIGH_CONFIG";

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
}

/// Effective configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Unit of the theoretical weight when `--unit` is omitted
    pub default_unit: Unit,

    /// Unit of the total when `--total-unit` is omitted
    pub default_total_unit: Unit,

    /// Output format when `--format` is left at `auto`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Offline cache generation and precache list
    pub cache: CacheManifest,
}

impl Config {
    /// Load the configuration commands run with
    ///
    /// A file named by `$WEIGH_CONFIG` must exist and parse. A broken file at
    /// the default location is logged and replaced by defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if std::env::var_os(CONFIG_ENV).is_some() {
            return Self::try_load();
        }
        Ok(Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable config");
            Self::default()
        }))
    }

    /// Load the configuration, failing on any unreadable file
    ///
    /// A missing default file yields defaults.
    pub fn try_load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_path(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a specific config file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_yaml(&contents).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from YAML text
    ///
    /// A document with nothing but blank lines and comments is the default config.
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yml::Error> {
        let has_content = contents.lines().any(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        });
        if !has_content {
            return Ok(Self::default());
        }
        serde_yml::from_str(contents)
    }

    /// Path the config is read from, if one can be determined
    pub fn path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(Self::default_path)
    }

    fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "weigh").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }
}
