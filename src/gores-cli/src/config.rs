//! Configuration management for the gores CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub maps_dir: Option<PathBuf>,
    pub types_dir: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("gores");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Resolve the maps root: explicit flag, then configured default, then `gores`
    pub fn resolve_maps(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.maps_dir.clone())
            .unwrap_or_else(|| PathBuf::from("gores"))
    }

    /// Resolve the types root: explicit flag, then configured default, then `types`
    pub fn resolve_types(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.types_dir.clone())
            .unwrap_or_else(|| PathBuf::from("types"))
    }

    pub fn set_maps_dir(&mut self, dir: &Path) {
        self.maps_dir = Some(dir.to_path_buf());
    }

    pub fn set_types_dir(&mut self, dir: &Path) {
        self.types_dir = Some(dir.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_flag_over_config() {
        let config = Config {
            maps_dir: Some(PathBuf::from("/configured/maps")),
            types_dir: None,
        };

        assert_eq!(
            config.resolve_maps(Some(PathBuf::from("/flag/maps"))),
            PathBuf::from("/flag/maps")
        );
        assert_eq!(config.resolve_maps(None), PathBuf::from("/configured/maps"));
        assert_eq!(config.resolve_types(None), PathBuf::from("types"));
    }

    #[test]
    fn test_resolve_defaults() {
        let config = Config::default();
        assert_eq!(config.resolve_maps(None), PathBuf::from("gores"));
        assert_eq!(config.resolve_types(None), PathBuf::from("types"));
    }

    #[test]
    fn test_config_path_ends_with_toml() {
        let path = Config::config_path().unwrap();
        assert!(path.ends_with("gores/config.toml"));
    }

    #[test]
    fn test_default_roundtrip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert!(back.maps_dir.is_none());
        assert!(back.types_dir.is_none());
    }
}
