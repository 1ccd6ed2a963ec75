//! Plugin configuration as stored in the agent's settings document

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::config::dispatch_config::{
    DeliveryMethod, DeliveryPreferences, DispatchConfig, NotificationChannels,
};
use crate::domain::identity::IdentifierMode;
use crate::domain::trigger::TriggerKind;

const DEFAULT_DELAY_SECS: f64 = 5.0;
const DEFAULT_COOLDOWN_SECS: f64 = 10.0;

/// Notification channel toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsSection {
    pub desktop: Option<bool>,
    pub sound: Option<bool>,
    pub sound_file: Option<String>,
}

/// Per-trigger toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggersSection {
    pub ask_user_question: Option<bool>,
    pub permission_request: Option<bool>,
    pub task_complete: Option<bool>,
    pub error: Option<bool>,
}

impl TriggersSection {
    fn get(&self, kind: TriggerKind) -> Option<bool> {
        match kind {
            TriggerKind::AskUserQuestion => self.ask_user_question,
            TriggerKind::PermissionRequest => self.permission_request,
            TriggerKind::TaskComplete => self.task_complete,
            TriggerKind::Error => self.error,
            TriggerKind::Unknown => Some(true),
        }
    }
}

/// Linux-under-Windows delivery settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WslSection {
    pub preferred_method: Option<String>,
    pub fallback_enabled: Option<bool>,
}

/// Plugin configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    pub enabled: Option<bool>,
    pub delay_seconds: Option<f64>,
    pub cooldown_seconds: Option<f64>,
    pub notifications: Option<NotificationsSection>,
    pub triggers: Option<TriggersSection>,
    pub instance_identifier: Option<String>,
    pub show_full_path_in_subtitle: Option<bool>,
    pub wsl: Option<WslSection>,
}

impl PluginConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            enabled: Some(true),
            delay_seconds: Some(DEFAULT_DELAY_SECS),
            cooldown_seconds: Some(DEFAULT_COOLDOWN_SECS),
            notifications: Some(NotificationsSection {
                desktop: Some(true),
                sound: Some(true),
                sound_file: None,
            }),
            triggers: Some(TriggersSection {
                ask_user_question: Some(true),
                permission_request: Some(true),
                task_complete: Some(false),
                error: Some(false),
            }),
            instance_identifier: Some(IdentifierMode::default().as_str().to_string()),
            show_full_path_in_subtitle: Some(true),
            wsl: Some(WslSection {
                preferred_method: Some(DeliveryMethod::default().as_str().to_string()),
                fallback_enabled: Some(true),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Nested sections merge field by field.
    pub fn merge(self, other: Self) -> Self {
        Self {
            enabled: other.enabled.or(self.enabled),
            delay_seconds: other.delay_seconds.or(self.delay_seconds),
            cooldown_seconds: other.cooldown_seconds.or(self.cooldown_seconds),
            notifications: merge_section(self.notifications, other.notifications, |b, o| {
                NotificationsSection {
                    desktop: o.desktop.or(b.desktop),
                    sound: o.sound.or(b.sound),
                    sound_file: o.sound_file.or(b.sound_file),
                }
            }),
            triggers: merge_section(self.triggers, other.triggers, |b, o| TriggersSection {
                ask_user_question: o.ask_user_question.or(b.ask_user_question),
                permission_request: o.permission_request.or(b.permission_request),
                task_complete: o.task_complete.or(b.task_complete),
                error: o.error.or(b.error),
            }),
            instance_identifier: other.instance_identifier.or(self.instance_identifier),
            show_full_path_in_subtitle: other
                .show_full_path_in_subtitle
                .or(self.show_full_path_in_subtitle),
            wsl: merge_section(self.wsl, other.wsl, |b, o| WslSection {
                preferred_method: o.preferred_method.or(b.preferred_method),
                fallback_enabled: o.fallback_enabled.or(b.fallback_enabled),
            }),
        }
    }

    pub fn enabled_or_default(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Get the debounce delay, or the default if unset or not a valid duration
    pub fn delay_or_default(&self) -> Duration {
        seconds_or(self.delay_seconds, DEFAULT_DELAY_SECS)
    }

    /// Get the global cooldown, or the default if unset or not a valid duration
    pub fn cooldown_or_default(&self) -> Duration {
        seconds_or(self.cooldown_seconds, DEFAULT_COOLDOWN_SECS)
    }

    pub fn desktop_or_default(&self) -> bool {
        self.notifications
            .as_ref()
            .and_then(|n| n.desktop)
            .unwrap_or(true)
    }

    pub fn sound_or_default(&self) -> bool {
        self.notifications
            .as_ref()
            .and_then(|n| n.sound)
            .unwrap_or(true)
    }

    /// Sound file to play; empty paths count as unset
    pub fn sound_file(&self) -> Option<&str> {
        self.notifications
            .as_ref()
            .and_then(|n| n.sound_file.as_deref())
            .filter(|path| !path.is_empty())
    }

    /// Whether a trigger raises notifications. Unlisted triggers are on.
    pub fn trigger_enabled_or_default(&self, kind: TriggerKind) -> bool {
        self.triggers
            .as_ref()
            .and_then(|t| t.get(kind))
            .unwrap_or(!matches!(kind, TriggerKind::TaskComplete | TriggerKind::Error))
    }

    /// Get the identifier mode, or the default if unset/invalid
    pub fn identifier_mode_or_default(&self) -> IdentifierMode {
        self.instance_identifier
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn show_full_path_or_default(&self) -> bool {
        self.show_full_path_in_subtitle.unwrap_or(true)
    }

    /// Get the preferred delivery method, or the default if unset/invalid
    pub fn delivery_method_or_default(&self) -> DeliveryMethod {
        self.wsl
            .as_ref()
            .and_then(|w| w.preferred_method.as_ref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn fallback_enabled_or_default(&self) -> bool {
        self.wsl
            .as_ref()
            .and_then(|w| w.fallback_enabled)
            .unwrap_or(true)
    }

    /// Resolve into the snapshot used for a single dispatch
    pub fn resolve(&self) -> DispatchConfig {
        let enabled_triggers: HashSet<TriggerKind> = TriggerKind::CONFIGURABLE
            .into_iter()
            .filter(|kind| self.trigger_enabled_or_default(*kind))
            .collect();

        DispatchConfig {
            enabled: self.enabled_or_default(),
            delay: self.delay_or_default(),
            cooldown: self.cooldown_or_default(),
            enabled_triggers,
            channels: NotificationChannels {
                desktop: self.desktop_or_default(),
                sound: self.sound_or_default(),
                sound_file: self.sound_file().map(Into::into),
            },
            identifier_mode: self.identifier_mode_or_default(),
            show_full_path: self.show_full_path_or_default(),
            delivery: DeliveryPreferences {
                method: self.delivery_method_or_default(),
                fallback_enabled: self.fallback_enabled_or_default(),
            },
        }
    }
}

fn merge_section<T>(base: Option<T>, other: Option<T>, merge: impl FnOnce(T, T) -> T) -> Option<T> {
    match (base, other) {
        (None, None) => None,
        (Some(b), None) => Some(b),
        (None, Some(o)) => Some(o),
        (Some(b), Some(o)) => Some(merge(b, o)),
    }
}

fn seconds_or(value: Option<f64>, default_secs: f64) -> Duration {
    value
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .unwrap_or_else(|| Duration::from_secs_f64(default_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = PluginConfig::defaults();
        assert!(config.enabled_or_default());
        assert_eq!(config.delay_or_default(), Duration::from_secs(5));
        assert_eq!(config.cooldown_or_default(), Duration::from_secs(10));
        assert!(config.desktop_or_default());
        assert!(config.sound_or_default());
        assert!(config.sound_file().is_none());
        assert!(config.trigger_enabled_or_default(TriggerKind::AskUserQuestion));
        assert!(config.trigger_enabled_or_default(TriggerKind::PermissionRequest));
        assert!(!config.trigger_enabled_or_default(TriggerKind::TaskComplete));
        assert!(!config.trigger_enabled_or_default(TriggerKind::Error));
        assert_eq!(config.identifier_mode_or_default(), IdentifierMode::ProjectName);
        assert!(config.show_full_path_or_default());
        assert_eq!(config.delivery_method_or_default(), DeliveryMethod::Auto);
        assert!(config.fallback_enabled_or_default());
    }

    #[test]
    fn empty_has_all_none() {
        let config = PluginConfig::empty();
        assert!(config.enabled.is_none());
        assert!(config.delay_seconds.is_none());
        assert!(config.notifications.is_none());
        assert!(config.triggers.is_none());
        assert!(config.wsl.is_none());
    }

    #[test]
    fn empty_resolves_like_defaults() {
        assert_eq!(PluginConfig::empty().resolve(), PluginConfig::defaults().resolve());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let other = PluginConfig {
            delay_seconds: Some(1.0),
            triggers: Some(TriggersSection {
                task_complete: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = PluginConfig::defaults().merge(other);

        assert_eq!(merged.delay_or_default(), Duration::from_secs(1));
        assert_eq!(merged.cooldown_or_default(), Duration::from_secs(10));
        assert!(merged.trigger_enabled_or_default(TriggerKind::TaskComplete));
        // sibling keys in the nested section survive
        assert!(merged.trigger_enabled_or_default(TriggerKind::AskUserQuestion));
        assert!(!merged.trigger_enabled_or_default(TriggerKind::Error));
    }

    #[test]
    fn merge_nested_sections_field_by_field() {
        let other = PluginConfig {
            notifications: Some(NotificationsSection {
                sound: Some(false),
                ..Default::default()
            }),
            wsl: Some(WslSection {
                preferred_method: Some("powershell".to_string()),
                fallback_enabled: None,
            }),
            ..Default::default()
        };

        let merged = PluginConfig::defaults().merge(other);

        assert!(merged.desktop_or_default());
        assert!(!merged.sound_or_default());
        assert_eq!(merged.delivery_method_or_default(), DeliveryMethod::PowerShell);
        assert!(merged.fallback_enabled_or_default());
    }

    #[test]
    fn parses_camel_case_document() {
        let json = r#"{
            "enabled": true,
            "delaySeconds": 2.5,
            "notifications": { "desktop": false, "soundFile": "/tmp/ding.wav" },
            "triggers": { "taskComplete": true },
            "instanceIdentifier": "sessionId",
            "showFullPathInSubtitle": false,
            "wsl": { "preferredMethod": "wsl-notify-send", "fallbackEnabled": false },
            "someFutureKey": 1
        }"#;
        let config: PluginConfig = serde_json::from_str(json).unwrap();
        let resolved = PluginConfig::defaults().merge(config).resolve();

        assert_eq!(resolved.delay, Duration::from_millis(2500));
        assert!(!resolved.channels.desktop);
        assert!(resolved.channels.sound);
        assert_eq!(
            resolved.channels.sound_file.as_deref(),
            Some(std::path::Path::new("/tmp/ding.wav"))
        );
        assert!(resolved.triggers_on(TriggerKind::TaskComplete));
        assert_eq!(resolved.identifier_mode, IdentifierMode::SessionId);
        assert!(!resolved.show_full_path);
        assert_eq!(resolved.delivery.method, DeliveryMethod::WslNotifySend);
        assert!(!resolved.delivery.fallback_enabled);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = PluginConfig {
            delay_seconds: Some(-1.0),
            cooldown_seconds: Some(f64::NAN),
            instance_identifier: Some("hostname".to_string()),
            wsl: Some(WslSection {
                preferred_method: Some("carrier-pigeon".to_string()),
                fallback_enabled: None,
            }),
            ..Default::default()
        };

        assert_eq!(config.delay_or_default(), Duration::from_secs(5));
        assert_eq!(config.cooldown_or_default(), Duration::from_secs(10));
        assert_eq!(config.identifier_mode_or_default(), IdentifierMode::ProjectName);
        assert_eq!(config.delivery_method_or_default(), DeliveryMethod::Auto);
    }

    #[test]
    fn zero_delay_and_cooldown_are_honoured() {
        let config = PluginConfig {
            delay_seconds: Some(0.0),
            cooldown_seconds: Some(0.0),
            ..Default::default()
        };
        assert_eq!(config.delay_or_default(), Duration::ZERO);
        assert_eq!(config.cooldown_or_default(), Duration::ZERO);
    }

    #[test]
    fn empty_sound_file_is_unset() {
        let config = PluginConfig {
            notifications: Some(NotificationsSection {
                sound_file: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(config.sound_file().is_none());
    }

    #[test]
    fn resolve_collects_enabled_triggers() {
        let resolved = PluginConfig::defaults().resolve();
        assert!(resolved.enabled_triggers.contains(&TriggerKind::AskUserQuestion));
        assert!(resolved.enabled_triggers.contains(&TriggerKind::PermissionRequest));
        assert!(!resolved.enabled_triggers.contains(&TriggerKind::TaskComplete));
        assert!(!resolved.enabled_triggers.contains(&TriggerKind::Unknown));
        assert!(resolved.triggers_on(TriggerKind::Unknown));
    }
}
