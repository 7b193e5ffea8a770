//! Logging setup for the runner.

use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber and routes `log` records into it.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;
    let subscriber = fmt().with_env_filter(filter).with_target(false).finish();

    tracing::subscriber::set_global_default(subscriber)?;
    LogTracer::init()?;
    Ok(())
}
