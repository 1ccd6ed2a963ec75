//! Notification request value object

use std::path::{Path, PathBuf};

use crate::domain::trigger::TriggerKind;

/// A request to surface an alert for an agent event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    message: String,
    trigger: TriggerKind,
    working_directory: PathBuf,
}

impl NotificationRequest {
    /// Create a new request
    pub fn new(
        message: impl Into<String>,
        trigger: TriggerKind,
        working_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            message: message.into(),
            trigger,
            working_directory: working_directory.into(),
        }
    }

    /// Create a request carrying the trigger's default message
    pub fn with_default_message(trigger: TriggerKind, working_directory: impl Into<PathBuf>) -> Self {
        Self::new(trigger.default_message(), trigger, working_directory)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trigger(&self) -> TriggerKind {
        self.trigger
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Debounce key: one pending delivery per trigger and directory
    pub fn key(&self) -> DispatchKey {
        DispatchKey {
            trigger: self.trigger,
            working_directory: self.working_directory.clone(),
        }
    }
}

/// Identifies a debounce slot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DispatchKey {
    pub trigger: TriggerKind,
    pub working_directory: PathBuf,
}

impl std::fmt::Display for DispatchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.trigger, self.working_directory.display())
    }
}
