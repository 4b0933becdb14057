//! Configuration management for EduBridge+

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::content::Mode;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Opaque key identifying this user's progress record
    pub user_key: String,

    /// Learning mode used when none is given on the command line
    pub default_mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self { user_key: "local".to_string(), default_mode: Mode::Basic }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "edubridge")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "edubridge").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_local_user_key() {
        let config = Config::default();
        assert_eq!(config.user_key, "local");
        assert_eq!(config.default_mode, Mode::Basic);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config { user_key: "user_42".into(), default_mode: Mode::Deep };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.user_key, "user_42");
        assert_eq!(back.default_mode, Mode::Deep);
    }

    #[test]
    fn unknown_mode_in_json_is_an_error_but_parse_is_not() {
        // serde is strict; the lenient path is Mode::parse.
        assert!(serde_json::from_str::<Mode>("\"turbo\"").is_err());
        assert_eq!(Mode::parse("turbo"), Mode::Basic);
    }
}
