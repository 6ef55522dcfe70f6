//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://degenvets-contact.workers.dev";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_COUNTRY_CODE: &str = "+1";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Contact endpoint URL
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Value the country code field starts with (and resets to)
    pub default_country_code: Option<String>,
    /// Show the falling-emoji animation on start
    pub seasonal_animation: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "degenvets", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn default_country_code(&self) -> &str {
        self.default_country_code
            .as_deref()
            .unwrap_or(DEFAULT_COUNTRY_CODE)
    }

    pub fn seasonal_animation(&self) -> bool {
        self.seasonal_animation.unwrap_or(true)
    }
}
