//! # Logging
//!
//! `tracing` subscriber setup. `RUST_LOG` overrides the default filter.
//! Output goes to stderr so CI logs keep it separate from anything piped.

use crate::constants::DEFAULT_LOG_FILTER;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
