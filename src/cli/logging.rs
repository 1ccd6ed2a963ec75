//! Tracing subscriber setup

use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins; otherwise warnings only, or debug with `verbose`.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "agent_alarm=debug"
    } else {
        "agent_alarm=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
