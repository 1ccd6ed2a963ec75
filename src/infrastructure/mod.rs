//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the settings file, external processes and
//! native notification mechanisms.

pub mod chime;
pub mod config;
pub mod environment;
pub mod notification;
pub mod process;

// Re-export adapters
pub use chime::{create_chime, BellChime, RodioChime};
pub use config::ClaudeSettingsStore;
pub use environment::SystemEnvironment;
pub use notification::PlatformRouter;
pub use process::TokioCommandRunner;
