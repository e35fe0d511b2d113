use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{io::ErrorKind, path::Path};

pub const CONFIG_PATH: &str = "randomizer.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Fixed seed for the generator.
	/// When not set the current time in milliseconds is used, so every run differs.
	pub seed: Option<i64>,
	/// How many numbers to print
	pub count: usize,
	/// Upper bound (inclusive) of the printed numbers
	pub max: u32,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			seed: None,
			count: 10,
			max: 100,
		}
	}
}

impl Config {
	pub fn from_toml(s: &str) -> Result<Self> {
		Ok(toml::from_str(s)?)
	}
	/// Reads the config at `path`. A missing file is not an error and gives the defaults.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();

		let contents = match std::fs::read_to_string(path) {
			Ok(c) => c,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
			Err(e) => {
				return Err(e).with_context(|| format!("reading {}", path.display()));
			}
		};

		Self::from_toml(&contents).with_context(|| format!("parsing {}", path.display()))
	}
}
