//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`. The level comes from
//! `RUST_LOG` when set, otherwise `warn` (`debug` with `--verbose`) so
//! log lines stay out of the way of the prompts.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Default logging level when `RUST_LOG` is not provided
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
