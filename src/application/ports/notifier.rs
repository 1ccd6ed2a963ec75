//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::alert::Alert;
use crate::domain::config::DeliveryPreferences;
use crate::domain::platform::PlatformKind;

use super::command::CommandError;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Failed to show notification: {0}")]
    SendFailed(String),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("All notification methods failed: {}", .0.join("; "))]
    AllMethodsFailed(Vec<String>),
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a desktop notification.
    ///
    /// # Arguments
    /// * `alert` - The sanitized payload
    /// * `preferences` - Mechanism preference and fallback policy
    ///
    /// # Returns
    /// Ok(()) once any mechanism accepted the alert
    async fn deliver(
        &self,
        alert: &Alert,
        preferences: &DeliveryPreferences,
    ) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn deliver(
        &self,
        alert: &Alert,
        preferences: &DeliveryPreferences,
    ) -> Result<(), NotificationError> {
        self.as_ref().deliver(alert, preferences).await
    }
}

/// Port selecting the delivery backend for a platform
pub trait DeliveryRouter: Send + Sync {
    fn backend(&self, platform: PlatformKind) -> &dyn Notifier;
}
