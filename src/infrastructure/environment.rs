//! Host environment adapter

use std::env;
use std::fs;

use tracing::debug;

use crate::application::ports::Environment;
use crate::domain::identity::SessionEnv;
use crate::domain::platform::{DisplayServer, PlatformKind, KERNEL_VERSION_PATH};

/// Reads platform and session facts from the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnvironment {
    fn platform(&self) -> PlatformKind {
        let kernel_version = match env::consts::OS {
            "linux" => fs::read_to_string(KERNEL_VERSION_PATH)
                .map_err(|e| debug!(error = %e, "Kernel version unreadable"))
                .ok(),
            _ => None,
        };
        PlatformKind::classify(env::consts::OS, kernel_version.as_deref())
    }

    fn session(&self) -> SessionEnv {
        SessionEnv {
            tmux_pane: env::var("TMUX_PANE").ok(),
            screen_session: env::var("STY").ok(),
            pid: std::process::id(),
        }
    }

    fn display_server(&self) -> DisplayServer {
        let session_type = env::var("XDG_SESSION_TYPE").ok();
        let wayland_display = env::var("WAYLAND_DISPLAY").ok();
        let x11_display = env::var("DISPLAY").ok();
        DisplayServer::classify(
            session_type.as_deref(),
            wayland_display.as_deref(),
            x11_display.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_reports_own_pid() {
        assert_eq!(SystemEnvironment::new().session().pid, std::process::id());
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn detects_macos() {
        assert_eq!(SystemEnvironment::new().platform(), PlatformKind::MacOs);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn detects_a_linux_variant() {
        assert!(matches!(
            SystemEnvironment::new().platform(),
            PlatformKind::Linux | PlatformKind::LinuxUnderWindows
        ));
    }
}
