//! Domain error types

use thiserror::Error;

/// Error when an unknown trigger name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid trigger: \"{input}\". Valid triggers are: askUserQuestion, permissionRequest, taskComplete, error")]
pub struct InvalidTriggerError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}
