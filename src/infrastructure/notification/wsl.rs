//! Linux-under-Windows notification adapter
//!
//! Tries, in order:
//! 1. the `wsl-notify-send.exe` bridge
//! 2. a PowerShell toast (BurntToast module when installed, raw toast XML otherwise)
//! 3. terminal bell and text block

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::ports::{CommandRunner, NotificationError, Notifier};
use crate::domain::alert::Alert;
use crate::domain::config::{DeliveryMethod, DeliveryPreferences};
use crate::domain::identity::APP_LABEL;
use crate::domain::text::{escape_powershell, escape_xml};

use super::terminal::TerminalNotifier;

const BRIDGE: &str = "wsl-notify-send.exe";
const BRIDGE_TIMEOUT: Duration = Duration::from_secs(3);

const POWERSHELL: &str = "powershell.exe";
const POWERSHELL_TIMEOUT: Duration = Duration::from_secs(5);

/// Tiered notifier for Linux running under a Windows host
pub struct WslNotifier<R: CommandRunner> {
    runner: R,
    terminal: TerminalNotifier,
}

impl<R: CommandRunner> WslNotifier<R> {
    pub fn new(runner: R, terminal: TerminalNotifier) -> Self {
        Self { runner, terminal }
    }

    async fn send_via_bridge(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        let args = vec![title.to_string(), message.to_string()];
        self.runner.run(BRIDGE, &args, BRIDGE_TIMEOUT).await?;
        Ok(())
    }

    async fn send_via_powershell(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        let args = vec![
            "-NoProfile".to_string(),
            "-Command".to_string(),
            toast_script(title, message),
        ];
        self.runner.run(POWERSHELL, &args, POWERSHELL_TIMEOUT).await?;
        Ok(())
    }
}

/// Build the PowerShell toast script.
///
/// BurntToast receives single-quoted literals; the fallback XML sits in a
/// literal here-string, so only XML escaping applies there.
fn toast_script(title: &str, message: &str) -> String {
    let ps_title = escape_powershell(title);
    let ps_message = escape_powershell(message);
    let xml_title = escape_xml(title);
    let xml_message = escape_xml(message);
    let app_id = escape_powershell(APP_LABEL);

    format!(
        r#"if (Get-Module -ListAvailable -Name BurntToast) {{
  New-BurntToastNotification -Text '{ps_title}', '{ps_message}'
}} else {{
  [Windows.UI.Notifications.ToastNotificationManager, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null
  [Windows.Data.Xml.Dom.XmlDocument, Windows.Data.Xml.Dom.XmlDocument, ContentType = WindowsRuntime] | Out-Null
  $template = @'
<toast>
  <visual>
    <binding template="ToastGeneric">
      <text>{xml_title}</text>
      <text>{xml_message}</text>
    </binding>
  </visual>
</toast>
'@
  $xml = New-Object Windows.Data.Xml.Dom.XmlDocument
  $xml.LoadXml($template)
  $toast = [Windows.UI.Notifications.ToastNotification]::new($xml)
  [Windows.UI.Notifications.ToastNotificationManager]::CreateToastNotifier('{app_id}').Show($toast)
}}"#
    )
}

#[async_trait]
impl<R: CommandRunner> Notifier for WslNotifier<R> {
    async fn deliver(
        &self,
        alert: &Alert,
        preferences: &DeliveryPreferences,
    ) -> Result<(), NotificationError> {
        let title = alert.title.as_str();
        let message = alert.folded_body();
        let method = preferences.method;
        let fallback = preferences.fallback_enabled;
        let mut failures = Vec::new();

        if matches!(method, DeliveryMethod::Auto | DeliveryMethod::WslNotifySend) {
            match self.send_via_bridge(title, &message).await {
                Ok(()) => return Ok(()),
                Err(e) if method == DeliveryMethod::WslNotifySend => {
                    warn!(error = %e, "wsl-notify-send failed");
                    if !fallback {
                        return Err(e);
                    }
                    failures.push(format!("{}: {}", BRIDGE, e));
                }
                Err(e) => {
                    debug!(error = %e, "wsl-notify-send unavailable, trying PowerShell");
                    failures.push(format!("{}: {}", BRIDGE, e));
                }
            }
        }

        let try_powershell = match method {
            DeliveryMethod::Auto | DeliveryMethod::PowerShell => true,
            DeliveryMethod::WslNotifySend => fallback,
        };

        if try_powershell {
            match self.send_via_powershell(title, &message).await {
                Ok(()) => return Ok(()),
                Err(e) if method == DeliveryMethod::PowerShell => {
                    warn!(error = %e, "PowerShell notification failed");
                    if !fallback {
                        return Err(e);
                    }
                    failures.push(format!("{}: {}", POWERSHELL, e));
                }
                Err(e) => {
                    debug!(error = %e, "PowerShell notification failed");
                    failures.push(format!("{}: {}", POWERSHELL, e));
                }
            }
        }

        if fallback {
            debug!("Falling back to terminal output");
            self.terminal.show(title, &message);
            return Ok(());
        }

        Err(NotificationError::AllMethodsFailed(failures))
    }
}
