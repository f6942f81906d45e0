//! Configuration management for the mapper layer
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::connector::ConnectionString;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_HEADER, CONFIG_FILE_NAME, DEFAULT_DATABASE_URL, DEFAULT_LOG_LEVEL,
};
use anyhow::{Context, Result};
use log::{info, LevelFilter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string of the form `<dialect>:///<location>`
    pub url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Maximum level: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Write to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed log level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to determine current directory")?;
        Self::load_from_dirs(&current_dir, dirs::config_dir().as_deref())
    }

    /// Load the first configuration found in `current_dir`, then `config_dir`,
    /// falling back to defaults.
    pub fn load_from_dirs(current_dir: &Path, config_dir: Option<&Path>) -> Result<Self> {
        match Self::find_config_file(current_dir, config_dir) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file(current_dir: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = current_dir.join(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = config_dir?.join(CONFIG_DIR_NAME).join("config.toml");
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.database
            .url
            .parse::<ConnectionString>()
            .with_context(|| format!("Invalid database url '{}'", self.database.url))?;

        self.logging.level_filter()?;

        if let Some(file) = &self.logging.file {
            if file.as_os_str().is_empty() {
                anyhow::bail!("logging.file cannot be empty");
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "{}\n# Generated on {}\n\n",
            CONFIG_FILE_HEADER,
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        info!("Generated default configuration at {}", path.as_ref().display());
        Ok(())
    }
}
