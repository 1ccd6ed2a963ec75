//! notify-send notification adapter

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{CommandError, CommandRunner, NotificationError, Notifier};
use crate::domain::alert::Alert;
use crate::domain::config::DeliveryPreferences;
use crate::domain::identity::APP_LABEL;

const NOTIFY_SEND: &str = "notify-send";
const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);
const EXPIRE_TIME_MS: &str = "10000";

/// notify-send notification adapter
pub struct NotifySendNotifier<R: CommandRunner> {
    runner: R,
    /// Application name for notifications
    app_name: String,
}

impl<R: CommandRunner> NotifySendNotifier<R> {
    /// Create a new notify-send notifier
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            app_name: APP_LABEL.to_string(),
        }
    }

    fn args(&self, title: &str, body: &str) -> Vec<String> {
        vec![
            "--app-name".to_string(),
            self.app_name.clone(),
            "--expire-time".to_string(),
            EXPIRE_TIME_MS.to_string(),
            title.to_string(),
            body.to_string(),
        ]
    }
}

#[async_trait]
impl<R: CommandRunner> Notifier for NotifySendNotifier<R> {
    async fn deliver(
        &self,
        alert: &Alert,
        _preferences: &DeliveryPreferences,
    ) -> Result<(), NotificationError> {
        let args = self.args(&alert.title, &alert.folded_body());

        match self.runner.run(NOTIFY_SEND, &args, COMMAND_TIMEOUT).await {
            Ok(_) => Ok(()),
            Err(CommandError::NotFound(_)) => Err(NotificationError::NotifySendNotFound),
            Err(e) => Err(NotificationError::Command(e)),
        }
    }
}
