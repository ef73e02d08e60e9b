//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to a caller-supplied writer; diagnostics go through `tracing`.

pub mod bytes;
pub mod normal;
pub mod range;
pub mod sequence;

use prng_core::seed::time_seed;
use prng_core::{NormalApprox, PcgRandom, PrngError, PseudoRandom, SystemClock};
use tracing::info;

use crate::config::{CliConfig, GeneratorKind};

/// The generator selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Legacy(PseudoRandom),
    Pcg(PcgRandom),
}

impl Generator {
    /// Build the configured generator, seeding from the system clock when no
    /// seed is configured.
    pub fn from_config(config: &CliConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| time_seed(&SystemClock));
        info!(
            generator = ?config.generator,
            seed,
            stream = config.stream,
            from_clock = config.seed.is_none(),
            "Generator initialised"
        );

        match config.generator {
            // Same truncation as a clock-seeded legacy generator.
            GeneratorKind::Legacy => Generator::Legacy(PseudoRandom::new(seed as i32)),
            GeneratorKind::Pcg => Generator::Pcg(PcgRandom::with_sequence(seed, config.stream)),
        }
    }

    /// Next raw output.
    pub fn next(&mut self) -> u32 {
        match self {
            Generator::Legacy(rng) => rng.next(),
            Generator::Pcg(rng) => rng.next(),
        }
    }

    /// Value in `[min, max]`.
    pub fn range(&mut self, min: i32, max: i32) -> Result<i32, PrngError> {
        match self {
            Generator::Legacy(rng) => rng.range(min, max),
            Generator::Pcg(rng) => rng.range(min, max),
        }
    }

    /// One approximately normal sample.
    pub fn normal(&mut self, dist: &NormalApprox) -> Result<i32, PrngError> {
        match self {
            Generator::Legacy(rng) => dist.sample(rng),
            Generator::Pcg(rng) => dist.sample(rng),
        }
    }

    /// Hex digits needed for one raw output.
    pub fn hex_width(&self) -> usize {
        match self {
            Generator::Legacy(_) => 4,
            Generator::Pcg(_) => 8,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_config(generator: GeneratorKind, seed: u64) -> CliConfig {
    CliConfig {
        generator,
        seed: Some(seed),
        ..CliConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_fixed_seed() {
        let mut config = test_config(GeneratorKind::Pcg, 814538);
        config.stream = 998877;
        let mut generator = Generator::from_config(&config);
        assert_eq!(generator.next(), 0x48c5_93f8);

        let config = test_config(GeneratorKind::Legacy, 814538);
        let mut generator = Generator::from_config(&config);
        assert_eq!(generator.next(), 0x02fa);
        assert_eq!(generator.hex_width(), 4);
    }

    #[test]
    fn test_legacy_range_limit_surfaces() {
        let config = test_config(GeneratorKind::Legacy, 1);
        let mut generator = Generator::from_config(&config);
        assert!(matches!(
            generator.range(2000, 6000),
            Err(PrngError::RangeTooLarge { .. })
        ));
    }
}
