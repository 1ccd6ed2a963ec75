//! Configuration store adapters

mod claude_settings;

pub use claude_settings::{ClaudeSettingsStore, PLUGIN_ID};
