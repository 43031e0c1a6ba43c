//! Wiki configuration (`_config.json`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the configuration file at the wiki root.
pub const CONFIG_FILE: &str = "_config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Site title and theme colors. Every key is optional in the file; missing
/// keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    pub title: String,

    #[serde(rename = "theme-background")]
    pub surface: String,

    #[serde(rename = "theme-background2")]
    pub surface2: String,

    #[serde(rename = "theme-background3")]
    pub surface3: String,

    #[serde(rename = "theme-text")]
    pub on_surface: String,

    #[serde(rename = "theme-primary")]
    pub primary: String,

    #[serde(rename = "theme-secondary")]
    pub secondary: String,

    #[serde(rename = "theme-accent")]
    pub accent: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            title: "Easy Wiki".into(),
            surface: "#242424".into(),
            surface2: "#363636".into(),
            surface3: "#484848".into(),
            on_surface: "#FFFFFF".into(),
            primary: "#C588F9".into(),
            secondary: "#5E9ED6".into(),
            accent: "#F6C177".into(),
        }
    }
}

impl WikiConfig {
    /// Path of the config file for a wiki rooted at `root`.
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Load `_config.json` from `root`, falling back to defaults when the
    /// file does not exist.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(root);
        if !path.exists() {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, root);
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the config to `root/_config.json`, replacing any existing file.
    pub fn write(&self, root: &Path) -> Result<PathBuf, ConfigError> {
        let path = Self::path(root);
        std::fs::write(&path, self.to_json()?)?;
        Ok(path)
    }
}
