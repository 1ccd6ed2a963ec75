//! Configuration value objects

pub mod dispatch_config;
pub mod plugin_config;

pub use dispatch_config::{
    DeliveryMethod, DeliveryPreferences, DispatchConfig, NotificationChannels,
    ParseDeliveryMethodError,
};
pub use plugin_config::{NotificationsSection, PluginConfig, TriggersSection, WslSection};
