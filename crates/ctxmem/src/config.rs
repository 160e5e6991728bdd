//! Configuration management for ctxmem.
//!
//! Configuration is loaded from multiple sources with precedence:
//! 1. Environment variables (CTXMEM_*)
//! 2. Config file (CTXMEM_CONFIG or <data dir>/config.toml)
//! 3. Default values

use anyhow::{Context, Result};
use ctxmem_core::ResurfaceConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const HOUR_SECS: u64 = 60 * 60;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Resurfacing settings
    #[serde(default)]
    pub resurfacing: ResurfacingConfig,

    /// Paths
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Explicit database file (defaults to <data_dir>/ctxmem.db)
    pub database_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResurfacingConfig {
    /// Active-file check interval in seconds
    #[serde(default = "default_interval")]
    pub interval_secs: u64,

    /// Gap since the previous visit that triggers a reminder, in hours
    #[serde(default = "default_return_after")]
    pub return_after_hours: u64,

    /// Age past which an untouched note is stale, in days
    #[serde(default = "default_stale_after")]
    pub stale_after_days: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Base directory for ctxmem data
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

// Default value functions
fn default_interval() -> u64 {
    60
}

fn default_return_after() -> u64 {
    24
}

fn default_stale_after() -> u64 {
    7
}

fn default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "ctxmem", "ctxmem") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ctxmem")
    }
}

impl Default for ResurfacingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            return_after_hours: default_return_after(),
            stale_after_days: default_stale_after(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl ResurfacingConfig {
    /// Policy settings for the core.
    pub fn to_policy(&self) -> ResurfaceConfig {
        ResurfaceConfig {
            check_interval: Duration::from_secs(self.interval_secs.max(1)),
            return_after: Duration::from_secs(self.return_after_hours * HOUR_SECS),
            stale_after: Duration::from_secs(self.stale_after_days * 24 * HOUR_SECS),
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, defaults when it does not exist.
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content =
                std::fs::read_to_string(config_path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Config::default())
        }
    }

    /// Get the config file path.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("CTXMEM_CONFIG") {
            PathBuf::from(path)
        } else {
            default_data_dir().join("config.toml")
        }
    }

    /// Resolve the database file.
    ///
    /// Priority: CTXMEM_DATABASE_PATH, `storage.database_path`, `<data_dir>/ctxmem.db`.
    pub fn database_path(&self) -> PathBuf {
        if let Ok(path) = std::env::var("CTXMEM_DATABASE_PATH") {
            return PathBuf::from(path);
        }
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| self.paths.data_dir.join("ctxmem.db"))
    }
}
