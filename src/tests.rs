#[cfg(test)]
mod tests {
	use crate::print_numbers;
	use randomizer::{Randomizer, config::Config};

	fn run(seed: i64, config: &Config) -> String {
		let mut rng = Randomizer::new(seed);
		let mut out = Vec::new();
		print_numbers(&mut rng, config, &mut out).unwrap();

		String::from_utf8(out).unwrap()
	}

	#[test]
	fn prints_ten_lines_by_default() {
		let output = run(1_700_000_000_000, &Config::default());
		let lines: Vec<&str> = output.lines().collect();

		assert_eq!(lines.len(), 10);
		for line in lines {
			let n: u32 = line.parse().unwrap();
			assert!(n <= 100, "{n} > 100");
		}
	}

	#[test]
	fn output_matches_generator() {
		let config = Config::default();
		let output = run(1, &config);

		let mut rng = Randomizer::new(1);
		let expected: String = (0..config.count)
			.map(|_| format!("{}\n", rng.next_int(config.max)))
			.collect();

		assert_eq!(output, expected);
		assert!(output.starts_with("25\n"));
	}

	#[test]
	fn same_seed_same_output() {
		let config = Config {
			seed: Some(42),
			count: 100,
			max: 6,
		};

		assert_eq!(run(42, &config), run(42, &config));
	}

	#[test]
	fn zero_count_prints_nothing() {
		let config = Config {
			count: 0,
			..Config::default()
		};

		assert!(run(1, &config).is_empty());
	}
}
