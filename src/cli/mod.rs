//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! and the application runner.

pub mod app;
pub mod args;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{load_merged_config, run_notify, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, NotifyOptions, TriggerArg};
pub use logging::init_logging;
pub use presenter::Presenter;
