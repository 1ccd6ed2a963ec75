//! Runtime environment port

use crate::domain::identity::SessionEnv;
use crate::domain::platform::{DisplayServer, PlatformKind};

/// Port for facts about the host the process runs on
pub trait Environment: Send + Sync {
    /// Detect the platform. Never fails.
    fn platform(&self) -> PlatformKind;

    /// Read the terminal session variables and process id
    fn session(&self) -> SessionEnv;

    fn display_server(&self) -> DisplayServer;
}
