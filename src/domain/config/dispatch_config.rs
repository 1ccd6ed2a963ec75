//! Resolved configuration snapshot read by the dispatcher and backends

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::config::plugin_config::PluginConfig;
use crate::domain::identity::IdentifierMode;
use crate::domain::trigger::TriggerKind;

/// Preferred Linux-under-Windows delivery mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMethod {
    /// Bridge executable first, then the scripting host
    #[default]
    Auto,
    WslNotifySend,
    PowerShell,
}

impl DeliveryMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::WslNotifySend => "wsl-notify-send",
            Self::PowerShell => "powershell",
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when parsing a delivery method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDeliveryMethodError {
    pub value: String,
}

impl fmt::Display for ParseDeliveryMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid delivery method '{}'. Valid options: auto, wsl-notify-send, powershell",
            self.value
        )
    }
}

impl std::error::Error for ParseDeliveryMethodError {}

impl FromStr for DeliveryMethod {
    type Err = ParseDeliveryMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "wsl-notify-send" => Ok(Self::WslNotifySend),
            "powershell" => Ok(Self::PowerShell),
            _ => Err(ParseDeliveryMethodError {
                value: s.to_string(),
            }),
        }
    }
}

/// How a backend should pick among its mechanisms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryPreferences {
    pub method: DeliveryMethod,
    pub fallback_enabled: bool,
}

impl Default for DeliveryPreferences {
    fn default() -> Self {
        Self {
            method: DeliveryMethod::Auto,
            fallback_enabled: true,
        }
    }
}

/// Which channels an alert goes out on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationChannels {
    pub desktop: bool,
    pub sound: bool,
    pub sound_file: Option<PathBuf>,
}

/// Configuration for a single dispatch call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub enabled: bool,
    pub delay: Duration,
    pub cooldown: Duration,
    pub enabled_triggers: HashSet<TriggerKind>,
    pub channels: NotificationChannels,
    pub identifier_mode: IdentifierMode,
    pub show_full_path: bool,
    pub delivery: DeliveryPreferences,
}

impl DispatchConfig {
    /// Whether a trigger may raise a notification.
    /// `Unknown` is never filtered.
    pub fn triggers_on(&self, kind: TriggerKind) -> bool {
        kind == TriggerKind::Unknown || self.enabled_triggers.contains(&kind)
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        PluginConfig::defaults().resolve()
    }
}
