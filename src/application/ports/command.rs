//! External process port interface

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Process execution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Command not found: {0}")]
    NotFound(String),

    #[error("Command timed out: {0}")]
    TimedOut(String),

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to run {program}: {reason}")]
    Io { program: String, reason: String },
}

/// Captured output of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Port for running external programs
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a program to completion.
    ///
    /// The child is killed when `timeout` elapses. A non-zero exit is an error.
    async fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError>;
}

#[async_trait]
impl<T: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<T> {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        self.as_ref().run(program, args, timeout).await
    }
}
