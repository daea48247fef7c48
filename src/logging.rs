//! Diagnostics go to stderr; stdout carries only protocol lines.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "rollcalld=info";

/// Installs the global subscriber. `RUST_LOG` overrides the default level.
///
/// Returns an error instead of panicking when a subscriber is already set.
pub fn init_logging() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging init failed: {e}"))
}
