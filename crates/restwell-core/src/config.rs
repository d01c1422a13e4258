//! TOML-based user preferences.
//!
//! Stores view preferences only -- a preferred theme override and the clock
//! format. Dashboard state itself is ephemeral by design and is never
//! written here.
//!
//! Configuration is stored at `~/.config/restwell/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/restwell[-dev]/` based on RESTWELL_ENV.
///
/// Set RESTWELL_ENV=dev to use the development config directory.
pub fn config_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("RESTWELL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("restwell-dev")
    } else {
        base_dir.join("restwell")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub clock_24h: bool,
    /// Preferred theme override key applied at startup (optional).
    /// Unknown keys are tolerated and fall back to the time-derived theme.
    #[serde(default)]
    pub theme: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            clock_24h: true,
            theme: None,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/restwell/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load from the config directory; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join("config.toml");
        Self::load_from(&path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = config_dir()?.join("config.toml");
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
