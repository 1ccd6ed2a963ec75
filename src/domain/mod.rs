//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod alert;
pub mod config;
pub mod error;
pub mod identity;
pub mod platform;
pub mod request;
pub mod text;
pub mod trigger;

// Re-export common types
pub use alert::Alert;
pub use config::{DeliveryMethod, DeliveryPreferences, DispatchConfig, PluginConfig};
pub use error::*;
pub use identity::{IdentifierMode, InstanceIdentity, SessionEnv};
pub use platform::{DisplayServer, PlatformKind};
pub use request::{DispatchKey, NotificationRequest};
pub use trigger::TriggerKind;
