//! Tracing setup for binaries and examples embedding the engine.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a pretty-printing subscriber for [tracing] events.
///
/// The log level is controlled through the `RUST_LOG` environment variable
/// and defaults to `info`. The engine itself only emits events; calling this
/// is the host application's choice, and tests leave it uninstalled.
pub fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(filter)
        .init();
}
