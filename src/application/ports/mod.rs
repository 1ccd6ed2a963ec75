//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod chime;
pub mod command;
pub mod config;
pub mod environment;
pub mod notifier;

// Re-export common types
pub use chime::{Chime, ChimeError};
pub use command::{CommandError, CommandOutput, CommandRunner};
pub use config::ConfigStore;
pub use environment::Environment;
pub use notifier::{DeliveryRouter, NotificationError, Notifier};
