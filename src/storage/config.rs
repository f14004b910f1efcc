//! Configuration handling for Pagefile
//!
//! Configuration is stored in `pagefile.toml` in the working directory
//! (local) and `~/.config/pagefile/config.toml` (global).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the local configuration file
pub const LOCAL_CONFIG_FILE: &str = "pagefile.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration local to a working directory
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LocalConfig {
    /// Directory page files live in (relative to the working directory)
    pub dir: Option<PathBuf>,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

/// Combined configuration (global + local)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub local: LocalConfig,
    pub global: GlobalConfig,
}

impl Config {
    /// Loads configuration from the global location and the working directory
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let local = Self::load_local(Path::new("."))?;

        Ok(Self { local, global })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "pagefile", "pagefile").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Loads local configuration from `dir/pagefile.toml`
    pub fn load_local(dir: &Path) -> Result<LocalConfig> {
        let config_path = dir.join(LOCAL_CONFIG_FILE);

        if !config_path.exists() {
            return Ok(LocalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read local config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse local config")
    }

    /// Returns the page directory, preferring an explicit override
    pub fn page_dir(&self, cli_dir: Option<&Path>) -> PathBuf {
        cli_dir
            .map(Path::to_path_buf)
            .or_else(|| self.local.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
