//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::PluginConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage.
    ///
    /// # Returns
    /// The plugin section (empty if the file or section doesn't exist)
    async fn load(&self) -> Result<PluginConfig, ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if configuration file exists.
    fn exists(&self) -> bool;
}
