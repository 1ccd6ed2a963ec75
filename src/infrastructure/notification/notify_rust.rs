//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::alert::Alert;
use crate::domain::config::DeliveryPreferences;
use crate::domain::identity::APP_LABEL;

const DISPLAY_TIMEOUT_MS: u32 = 10_000;

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Application name for notifications
    app_name: String,
    /// Show the subtitle natively instead of folding it into the body
    native_subtitle: bool,
}

impl NotifyRustNotifier {
    /// Create a notifier that folds the subtitle into the body
    pub fn new() -> Self {
        Self {
            app_name: APP_LABEL.to_string(),
            native_subtitle: false,
        }
    }

    /// Create a notifier that shows the subtitle natively (macOS)
    pub fn with_native_subtitle() -> Self {
        Self {
            native_subtitle: true,
            ..Self::new()
        }
    }

    fn body_and_subtitle(&self, alert: &Alert) -> (String, Option<String>) {
        if self.native_subtitle {
            (alert.message.clone(), alert.subtitle.clone())
        } else {
            (alert.folded_body(), None)
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "macos")]
fn apply_subtitle(notification: &mut Notification, subtitle: Option<&str>) {
    if let Some(subtitle) = subtitle {
        notification.subtitle(subtitle);
    }
}

#[cfg(not(target_os = "macos"))]
fn apply_subtitle(_notification: &mut Notification, _subtitle: Option<&str>) {}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn deliver(
        &self,
        alert: &Alert,
        _preferences: &DeliveryPreferences,
    ) -> Result<(), NotificationError> {
        let title = alert.title.clone();
        let (body, subtitle) = self.body_and_subtitle(alert);
        let app_name = self.app_name.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut notification = Notification::new();
            notification
                .appname(&app_name)
                .summary(&title)
                .body(&body)
                .timeout(Timeout::Milliseconds(DISPLAY_TIMEOUT_MS));
            apply_subtitle(&mut notification, subtitle.as_deref());

            notification
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}
