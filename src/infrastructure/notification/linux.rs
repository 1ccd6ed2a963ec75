//! Linux notification adapter
//!
//! Native D-Bus notification first, then `notify-send`, then the terminal
//! when `notify-send` is not installed.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::ports::{CommandRunner, NotificationError, Notifier};
use crate::domain::alert::Alert;
use crate::domain::config::DeliveryPreferences;
use crate::domain::platform::DisplayServer;

use super::notify_send::NotifySendNotifier;
use super::terminal::TerminalNotifier;

const INSTALL_HINTS: [&str; 3] = [
    "sudo apt-get install libnotify-bin  (Debian/Ubuntu)",
    "sudo yum install libnotify           (RHEL/CentOS)",
    "sudo pacman -S libnotify             (Arch Linux)",
];

pub struct LinuxNotifier<P: Notifier, R: CommandRunner> {
    primary: P,
    notify_send: NotifySendNotifier<R>,
    terminal: TerminalNotifier,
    display_server: DisplayServer,
}

impl<P: Notifier, R: CommandRunner> LinuxNotifier<P, R> {
    pub fn new(
        primary: P,
        notify_send: NotifySendNotifier<R>,
        terminal: TerminalNotifier,
        display_server: DisplayServer,
    ) -> Self {
        Self {
            primary,
            notify_send,
            terminal,
            display_server,
        }
    }
}

#[async_trait]
impl<P: Notifier, R: CommandRunner> Notifier for LinuxNotifier<P, R> {
    async fn deliver(
        &self,
        alert: &Alert,
        preferences: &DeliveryPreferences,
    ) -> Result<(), NotificationError> {
        if self.display_server == DisplayServer::Unknown {
            warn!("Could not detect display server (X11/Wayland)");
        }

        let Err(e) = self.primary.deliver(alert, preferences).await else {
            return Ok(());
        };
        debug!(error = %e, "Native notification failed, trying notify-send");

        match self.notify_send.deliver(alert, preferences).await {
            Err(NotificationError::NotifySendNotFound) => {
                warn!(
                    hints = %INSTALL_HINTS.join("; "),
                    "notify-send not found. Please install libnotify"
                );
                self.terminal.show(&alert.title, &alert.folded_body());
                Ok(())
            }
            other => other,
        }
    }
}
