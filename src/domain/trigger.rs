//! Trigger kinds that can raise a notification

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidTriggerError;

/// The category of agent event behind a notification request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriggerKind {
    /// The agent asked the user a question
    AskUserQuestion,
    /// The agent needs permission to continue
    PermissionRequest,
    /// The agent finished a task
    TaskComplete,
    /// The agent hit an error
    Error,
    /// Anything else; never filtered by trigger settings
    #[default]
    Unknown,
}

impl TriggerKind {
    /// All triggers that can be toggled in settings
    pub const CONFIGURABLE: [TriggerKind; 4] = [
        Self::AskUserQuestion,
        Self::PermissionRequest,
        Self::TaskComplete,
        Self::Error,
    ];

    /// Get the settings / command-line name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AskUserQuestion => "askUserQuestion",
            Self::PermissionRequest => "permissionRequest",
            Self::TaskComplete => "taskComplete",
            Self::Error => "error",
            Self::Unknown => "unknown",
        }
    }

    /// Message shown when the caller does not supply one
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::AskUserQuestion => "Claude Code is waiting for your answer to a question",
            Self::PermissionRequest => "Claude Code is requesting permission to proceed",
            Self::TaskComplete => "Claude Code has completed a task",
            Self::Error => "Claude Code encountered an error",
            Self::Unknown => "Claude Code is waiting for your input",
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TriggerKind {
    type Err = InvalidTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "askUserQuestion" => Ok(Self::AskUserQuestion),
            "permissionRequest" => Ok(Self::PermissionRequest),
            "taskComplete" => Ok(Self::TaskComplete),
            "error" => Ok(Self::Error),
            "unknown" => Ok(Self::Unknown),
            _ => Err(InvalidTriggerError {
                input: s.to_string(),
            }),
        }
    }
}
