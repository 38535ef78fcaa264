use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::api::wheretheiss::ISS_NORAD_ID;

/// Credentials for the geocoding API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    pub api_key: String,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional NORAD catalog id of the tracked satellite; the ISS if unset.
    pub satellite_id: Option<u32>,

    /// Example TOML:
    /// [geocoding]
    /// api_key = "..."
    pub geocoding: Option<GeocodingConfig>,
}

impl Config {
    /// The tracked satellite, defaulting to the ISS.
    pub fn tracked_satellite_id(&self) -> u32 {
        self.satellite_id.unwrap_or(ISS_NORAD_ID)
    }

    pub fn set_satellite_id(&mut self, id: u32) {
        self.satellite_id = Some(id);
    }

    /// Returns the geocoding API key, if configured.
    pub fn geocoding_api_key(&self) -> Option<&str> {
        self.geocoding.as_ref().map(|cfg| cfg.api_key.as_str())
    }

    pub fn is_geocoding_configured(&self) -> bool {
        self.geocoding_api_key().is_some()
    }

    /// Set/replace the geocoding API key.
    pub fn set_geocoding_api_key(&mut self, api_key: String) {
        self.geocoding = Some(GeocodingConfig { api_key });
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "iss-tracker", "iss-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
