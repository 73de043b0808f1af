//! okpick configuration file handling

use anyhow::{Context, Result};
use okpick_color::ColorSpace;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "okpick.toml";

/// Top-level okpick configuration (okpick.toml)
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct OkpickConfig {
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Picker defaults
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct PickerConfig {
    /// Color space used when a command is not given `--space`
    #[serde(default)]
    pub space: ColorSpace,
}

/// Output configuration
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Print gradients as CSS `linear-gradient(...)` text
    #[serde(default)]
    pub css: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OkpickConfig {
    /// Load configuration from a directory (looks for okpick.toml) or a file
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found at {}. Run `okpick config init` to create one.",
                CONFIG_FILE,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Resolve the config for a run: the explicit path if given, else
    /// `./okpick.toml` when present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_dir(path);
        }

        let local = Path::new(".");
        if local.join(CONFIG_FILE).is_file() {
            Self::load_from_dir(local)
        } else {
            tracing::debug!("No {} in working directory, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid okpick config")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Write the default configuration. `path` may be a directory or a file;
    /// an existing file is only replaced with `force`.
    pub fn write_default(path: &Path, force: bool) -> Result<PathBuf> {
        let target = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if target.exists() && !force {
            anyhow::bail!(
                "{} already exists. Pass --force to overwrite it.",
                target.display()
            );
        }

        let content = Self::default().to_toml()?;
        fs::write(&target, content)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        Ok(target)
    }
}
