use anyhow::Result;
use randomizer::{
	Randomizer,
	config::{self, Config},
	logging,
};
use std::io::{self, Write};
use tracing::info;

mod tests;

fn main() -> Result<()> {
	logging::init_logger()?;

	let config = Config::load(config::CONFIG_PATH)?;

	// seeding from the clock means every run prints something different,
	// set `seed` in the config to get a fixed sequence
	let seed = config
		.seed
		.unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

	info!(seed, count = config.count, max = config.max, "Generating numbers");

	let mut rng = Randomizer::new(seed);
	print_numbers(&mut rng, &config, io::stdout().lock())?;

	Ok(())
}

/// Writes `config.count` numbers in `0..=config.max`, one per line
pub fn print_numbers(rng: &mut Randomizer, config: &Config, mut out: impl Write) -> Result<()> {
	for _ in 0..config.count {
		writeln!(out, "{}", rng.next_int(config.max))?;
	}
	out.flush()?;

	Ok(())
}
