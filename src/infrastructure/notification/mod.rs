//! Notification infrastructure module
//!
//! Provides per-platform delivery backends using notify-rust (primary)
//! or platform-specific tools as fallback.

mod linux;
mod notify_rust;
mod notify_send;
mod router;
mod terminal;
mod wsl;

#[cfg(test)]
mod testing;

pub use linux::LinuxNotifier;
pub use self::notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;
pub use router::PlatformRouter;
pub use terminal::TerminalNotifier;
pub use wsl::WslNotifier;
