use anyhow::{Result, anyhow};
use std::io;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Used when `RUST_LOG` is not set
const DEFAULT_DIRECTIVE: &str = "randomizer=info";

/// Installs the global subscriber. Logs go to stderr, stdout is left for the numbers.
pub fn init_logger() -> Result<()> {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

	FmtSubscriber::builder()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.try_init()
		.map_err(|e| anyhow!("failed to set up logging: {e}"))?;

	Ok(())
}
