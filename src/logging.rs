//! Logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global subscriber. `RUST_LOG` overrides `default_level`.
///
/// Logs go to stderr so `--json` output on stdout stays machine-readable.
pub fn initialize_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
