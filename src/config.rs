//! Configuration for frameline output.
//!
//! Loaded from `~/.frameline/config.toml`:
//!
//! ```toml
//! [terminal]
//! # auto: follow the CI environment variable
//! # interactive: always use cursor addressing
//! # limited: never move the cursor
//! mode = "auto"
//!
//! # auto | always | never
//! emoji = "auto"
//!
//! # Columns of frame prefix already on the line
//! prefix_width = 0
//! ```
//!
//! Command-line flags take precedence over the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::core::capability::{EmojiMode, RenderMode, TermFeatures};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not determine config path")]
    NoConfigDir,
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal capability overrides
    pub terminal: TerminalConfig,
}

/// Terminal configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub mode: RenderMode,
    pub emoji: EmojiMode,
    pub prefix_width: usize,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring config: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from `path`
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Get config file path
    pub fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".frameline").join("config.toml"))
    }

    /// Apply the configured overrides to detected features
    pub fn features(&self, detected: TermFeatures) -> TermFeatures {
        detected.with_overrides(self.terminal.mode, self.terminal.emoji)
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.terminal.mode, RenderMode::Auto);
        assert_eq!(config.terminal.emoji, EmojiMode::Auto);
        assert_eq!(config.terminal.prefix_width, 0);
    }

    #[test]
    fn test_parse_terminal_section() {
        let config = Config::from_toml(
            "[terminal]\nmode = \"limited\"\nemoji = \"never\"\nprefix_width = 2\n",
        )
        .unwrap();
        assert_eq!(config.terminal.mode, RenderMode::Limited);
        assert_eq!(config.terminal.emoji, EmojiMode::Never);
        assert_eq!(config.terminal.prefix_width, 2);

        let features = config.features(TermFeatures::all());
        assert!(features.is_capability_limited());
        assert!(!features.supports_emoji());
    }

    #[test]
    fn test_invalid_mode_is_error() {
        let err = Config::from_toml("[terminal]\nmode = \"sideways\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("frameline-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let mut config = Config::default();
        config.terminal.mode = RenderMode::Interactive;
        config.terminal.emoji = EmojiMode::Always;

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/frameline.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
