//! Linear congruential generator with the "Numerical Recipes" constants

use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Randomizer {
	seed: i64,
}

impl Randomizer {
	pub const MODULUS: i64 = 233280;
	pub const MULTIPLIER: i64 = 9301;
	pub const INCREMENT: i64 = 49297;

	/// Seed used by [`Randomizer::default`]
	pub const DEFAULT_SEED: i64 = 1;

	/// Creates a generator with the given seed.
	///
	/// The seed is stored as is. It doesn't have to be in `0..MODULUS`,
	/// the first call to [`Randomizer::next_float`] brings it into range.
	pub fn new(seed: i64) -> Self {
		debug!(seed, "randomizer created");

		Self { seed }
	}
	/// The current state. Always in `0..MODULUS` after the first advance.
	pub fn seed(&self) -> i64 {
		self.seed
	}
	/// Advances the state and returns a value in `[0, 1)`.
	pub fn next_float(&mut self) -> f32 {
		// reducing first keeps the product far from i64::MAX and
		// gives the same result as reducing (seed * a + c) directly
		let seed = self.seed.rem_euclid(Self::MODULUS);
		let next_seed = (seed * Self::MULTIPLIER + Self::INCREMENT).rem_euclid(Self::MODULUS);

		trace!(from = self.seed, to = next_seed, "advance");
		self.seed = next_seed;

		self.seed as f32 / Self::MODULUS as f32
	}
	/// Returns an integer in `0..=max`, rounding `max * next_float()` half up.
	///
	/// Advances the state exactly once.
	pub fn next_int(&mut self, max: u32) -> u32 {
		let scaled = max as f32 * self.next_float();

		// f32 can't represent every u32, keep the result in bounds
		(scaled.round() as u32).min(max)
	}
}

impl Default for Randomizer {
	fn default() -> Self {
		Self::new(Self::DEFAULT_SEED)
	}
}
