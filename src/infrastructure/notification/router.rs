//! Platform to backend routing

use crate::application::ports::{DeliveryRouter, Environment, Notifier};
use crate::domain::platform::PlatformKind;
use crate::infrastructure::process::TokioCommandRunner;

use super::linux::LinuxNotifier;
use super::notify_rust::NotifyRustNotifier;
use super::notify_send::NotifySendNotifier;
use super::terminal::TerminalNotifier;
use super::wsl::WslNotifier;

/// One backend per platform variant
pub struct PlatformRouter {
    mac_os: Box<dyn Notifier>,
    windows: Box<dyn Notifier>,
    linux: Box<dyn Notifier>,
    linux_under_windows: Box<dyn Notifier>,
}

impl PlatformRouter {
    pub fn new(
        mac_os: Box<dyn Notifier>,
        windows: Box<dyn Notifier>,
        linux: Box<dyn Notifier>,
        linux_under_windows: Box<dyn Notifier>,
    ) -> Self {
        Self {
            mac_os,
            windows,
            linux,
            linux_under_windows,
        }
    }

    /// Build the native backends for the host
    pub fn native(environment: &impl Environment) -> Self {
        let runner = TokioCommandRunner::new();
        let terminal = TerminalNotifier::new();

        Self::new(
            Box::new(NotifyRustNotifier::with_native_subtitle()),
            Box::new(NotifyRustNotifier::new()),
            Box::new(LinuxNotifier::new(
                NotifyRustNotifier::new(),
                NotifySendNotifier::new(runner),
                terminal.clone(),
                environment.display_server(),
            )),
            Box::new(WslNotifier::new(runner, terminal)),
        )
    }
}

impl DeliveryRouter for PlatformRouter {
    fn backend(&self, platform: PlatformKind) -> &dyn Notifier {
        match platform {
            PlatformKind::MacOs => self.mac_os.as_ref(),
            PlatformKind::Windows => self.windows.as_ref(),
            PlatformKind::Linux => self.linux.as_ref(),
            PlatformKind::LinuxUnderWindows => self.linux_under_windows.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NotificationError;
    use crate::domain::alert::Alert;
    use crate::domain::config::DeliveryPreferences;
    use async_trait::async_trait;

    struct Tagged(&'static str);

    #[async_trait]
    impl Notifier for Tagged {
        async fn deliver(
            &self,
            _alert: &Alert,
            _preferences: &DeliveryPreferences,
        ) -> Result<(), NotificationError> {
            Err(NotificationError::SendFailed(self.0.to_string()))
        }
    }

    #[tokio::test]
    async fn routes_each_platform_to_its_backend() {
        let router = PlatformRouter::new(
            Box::new(Tagged("macos")),
            Box::new(Tagged("windows")),
            Box::new(Tagged("linux")),
            Box::new(Tagged("wsl")),
        );
        let alert = Alert {
            title: "t".to_string(),
            subtitle: None,
            message: "m".to_string(),
        };

        for platform in [
            PlatformKind::MacOs,
            PlatformKind::Windows,
            PlatformKind::Linux,
            PlatformKind::LinuxUnderWindows,
        ] {
            let result = router
                .backend(platform)
                .deliver(&alert, &DeliveryPreferences::default())
                .await;
            match result {
                Err(NotificationError::SendFailed(tag)) => assert_eq!(tag, platform.as_str()),
                other => panic!("unexpected result {:?}", other),
            }
        }
    }
}
