//! Configuration management for the application.
//!
//! Defaults for `keymapc generate` can be stored in a TOML file with
//! platform-specific directory resolution. Command line flags always win
//! over values from the file.

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::data::{Host, Preset};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Defaults for the `generate` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Host keyboard layout
    pub host: Host,
    /// Keymap preset
    pub keymap: Preset,
    /// Emit the auto shift callbacks
    pub autoshift: bool,
    /// Output file (stdout when unset)
    pub output: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `generate` command defaults
    pub generate: GenerateConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/keymapc/`
    /// - macOS: `~/Library/Application Support/keymapc/`
    /// - Windows: `%APPDATA%\keymapc\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// Host and keymap names are already checked while parsing; the output
    /// path must not point to a directory.
    pub fn validate(&self) -> Result<()> {
        if let Some(output) = &self.generate.output {
            if output.is_dir() {
                anyhow::bail!("Output path is a directory: {}", output.display());
            }
        }

        Ok(())
    }
}
