//! Main app runner for a single notification

use std::process::ExitCode;

use tracing::{debug, warn};

use crate::application::ports::ConfigStore;
use crate::application::{DeliveryOutcome, DispatchOutcome, Dispatcher};
use crate::domain::config::PluginConfig;
use crate::domain::request::NotificationRequest;
use crate::infrastructure::{create_chime, ClaudeSettingsStore, PlatformRouter, SystemEnvironment};

use super::args::NotifyOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Dispatch one notification and wait for it to settle.
///
/// Suppression and delivery failures are reported but still exit successfully.
pub async fn run_notify(options: NotifyOptions) -> ExitCode {
    let presenter = Presenter::new();

    let config = load_merged_config(&ClaudeSettingsStore::new()).await;

    let environment = SystemEnvironment::new();
    let router = PlatformRouter::native(&environment);
    let dispatcher = Dispatcher::new(environment, router, create_chime());

    let request = match options.message {
        Some(message) => NotificationRequest::new(message, options.trigger, options.working_directory),
        None => NotificationRequest::with_default_message(options.trigger, options.working_directory),
    };

    match dispatcher.notify(request, config.resolve()).await {
        DispatchOutcome::Suppressed(reason) => {
            presenter.info(&format!("Notification skipped - {}", reason));
        }
        DispatchOutcome::Scheduled(ticket) => match ticket.outcome().await {
            DeliveryOutcome::Delivered(platform) => {
                debug!(platform = %platform, "Notification settled");
            }
            DeliveryOutcome::Failed(e) => {
                presenter.warn(&format!("Notification failed: {}", e));
            }
            DeliveryOutcome::Superseded => {
                debug!("Notification superseded");
            }
        },
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Load the plugin section and merge it over the defaults.
///
/// Any load failure is logged and yields the defaults.
pub async fn load_merged_config(store: &impl ConfigStore) -> PluginConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            warn!(
                path = %store.path().display(),
                error = %e,
                "Failed to load config, using defaults"
            );
            PluginConfig::empty()
        }
    };

    // Merge: defaults < file
    PluginConfig::defaults().merge(file_config)
}
