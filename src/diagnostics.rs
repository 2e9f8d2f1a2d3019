//! Logging setup and user-facing diagnostics.

use std::fmt::Display;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `RUST_LOG` overrides the default level.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

pub fn warn(msg: impl Display) {
    tracing::warn!("{}", msg);
}

/// Render an error with its full context chain on one line.
pub fn error_message(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}
