//! Platform classification

use std::fmt;

/// Marker file holding the running kernel's version banner
pub const KERNEL_VERSION_PATH: &str = "/proc/version";

/// Platforms with their own delivery backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    MacOs,
    Windows,
    Linux,
    /// Linux running inside a Windows host (WSL)
    LinuxUnderWindows,
}

impl PlatformKind {
    /// Classify from the OS identity and, on Linux, the kernel version banner.
    ///
    /// Never fails: unknown operating systems are treated as Linux.
    pub fn classify(os: &str, kernel_version: Option<&str>) -> Self {
        match os {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            "linux" => match kernel_version {
                Some(banner) if is_windows_hosted(banner) => Self::LinuxUnderWindows,
                _ => Self::Linux,
            },
            _ => Self::Linux,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::LinuxUnderWindows => "wsl",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn is_windows_hosted(kernel_version: &str) -> bool {
    kernel_version.contains("Microsoft") || kernel_version.contains("WSL")
}

/// Linux display server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayServer {
    Wayland,
    X11,
    #[default]
    Unknown,
}

impl DisplayServer {
    /// Classify from `XDG_SESSION_TYPE`, `WAYLAND_DISPLAY` and `DISPLAY`
    pub fn classify(
        session_type: Option<&str>,
        wayland_display: Option<&str>,
        x11_display: Option<&str>,
    ) -> Self {
        let present = |value: Option<&str>| value.is_some_and(|v| !v.is_empty());

        if session_type == Some("wayland") || present(wayland_display) {
            return Self::Wayland;
        }
        if session_type == Some("x11") || present(x11_display) {
            return Self::X11;
        }
        Self::Unknown
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wayland => "wayland",
            Self::X11 => "x11",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DisplayServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
