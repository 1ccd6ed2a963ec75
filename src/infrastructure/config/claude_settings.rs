//! Agent settings document adapter
//!
//! Reads the plugin section of `~/.claude/settings.json`.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::PluginConfig;
use crate::domain::error::ConfigError;

/// Key of the plugin's section under `pluginConfigs`
pub const PLUGIN_ID: &str = "plugin-alarm@your-marketplace";

const PLUGIN_CONFIGS_KEY: &str = "pluginConfigs";

/// Config store backed by the agent's settings file
pub struct ClaudeSettingsStore {
    path: PathBuf,
}

impl ClaudeSettingsStore {
    /// Create a store for `~/.claude/settings.json`
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));

        Self {
            path: home.join(".claude").join("settings.json"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Extract the plugin section from a settings document
    fn parse_settings(content: &str) -> Result<PluginConfig, ConfigError> {
        let settings: Value =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        match settings
            .get(PLUGIN_CONFIGS_KEY)
            .and_then(|configs| configs.get(PLUGIN_ID))
        {
            Some(section) => {
                PluginConfig::deserialize(section).map_err(|e| ConfigError::ParseError(e.to_string()))
            }
            None => Ok(PluginConfig::empty()),
        }
    }
}

impl Default for ClaudeSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for ClaudeSettingsStore {
    async fn load(&self) -> Result<PluginConfig, ConfigError> {
        if !self.exists() {
            // Return empty config if file doesn't exist
            return Ok(PluginConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_settings(&content)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
