//! Configuration for the alibi CLI.
//!
//! Represents an optional `alibi.yaml` in the working directory. Supports
//! forward-compatible YAML parsing (unknown fields are ignored), sensible
//! defaults for every field, and validation of config values. A missing
//! config file is not an error; defaults apply.

use crate::error::{AlibiError, Result};
use crate::history::DEFAULT_HISTORY_DIR;
use crate::request::{Category, Length, Tone};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "alibi.yaml";

fn default_history_dir() -> String {
    DEFAULT_HISTORY_DIR.to_string()
}
fn default_category() -> String {
    Category::default().as_str().to_string()
}
fn default_tone() -> String {
    Tone::default().as_str().to_string()
}
fn default_length() -> String {
    Length::default().as_str().to_string()
}

/// CLI configuration.
///
/// CLI flags override these values; these values override the built-in
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory daily history logs are written to (default: ".history").
    #[serde(default = "default_history_dir")]
    pub history_dir: String,

    /// Default scenario category for `generate`/`rephrase`.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Default tone for `generate`/`rephrase`.
    #[serde(default = "default_tone")]
    pub default_tone: String,

    /// Default output length for `generate`/`rephrase`.
    #[serde(default = "default_length")]
    pub default_length: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_dir: default_history_dir(),
            default_category: default_category(),
            default_tone: default_tone(),
            default_length: default_length(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AlibiError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, falling back to defaults when the file
    /// does not exist. A present-but-invalid file is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| AlibiError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AlibiError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `history_dir` must be non-empty
    /// - `default_category`, `default_tone`, `default_length` must be known
    ///   display names
    pub fn validate(&self) -> Result<()> {
        if self.history_dir.trim().is_empty() {
            return Err(AlibiError::UserError(
                "config validation failed: history_dir must be non-empty".to_string(),
            ));
        }

        if Category::from_str(&self.default_category).is_none() {
            return Err(AlibiError::UserError(format!(
                "config validation failed: unknown default_category '{}'",
                self.default_category
            )));
        }

        if Tone::from_str(&self.default_tone).is_none() {
            return Err(AlibiError::UserError(format!(
                "config validation failed: unknown default_tone '{}'",
                self.default_tone
            )));
        }

        if Length::from_str(&self.default_length).is_none() {
            return Err(AlibiError::UserError(format!(
                "config validation failed: unknown default_length '{}'",
                self.default_length
            )));
        }

        Ok(())
    }
}
