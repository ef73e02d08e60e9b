//! Range containment and rejection tests for both generators.

use chrono::{TimeZone, Utc};
use prng_core::{FixedClock, PcgRandom, PrngError, PseudoRandom};

const PAIRS: usize = 32_768;

/// Maps two raw draws onto an ordered `(min, max)` pair in `[-500, 2499]`.
fn ordered_pair(a: u32, b: u32) -> (i32, i32) {
    let a = (a % 3000) as i32 - 500;
    let b = (b % 3000) as i32 - 500;
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

#[test]
fn test_legacy_range() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2015, 1, 9, 4, 30, 0).unwrap());
    let mut rng = PseudoRandom::from_clock(&clock);

    assert!(matches!(
        rng.range(2000, 6000),
        Err(PrngError::RangeTooLarge { .. })
    ));
    assert!(matches!(
        rng.range(5, 1),
        Err(PrngError::InvalidRange { .. })
    ));

    for _ in 0..PAIRS {
        let (min, max) = ordered_pair(rng.next(), rng.next());

        let value = rng.range(min, max).unwrap();
        assert!(value >= min, "{} below {}", value, min);
        assert!(value <= max, "{} above {}", value, max);
    }
}

#[test]
fn test_pcg_range() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2015, 1, 9, 4, 30, 0).unwrap());
    let mut rng = PcgRandom::from_clock(&clock);

    assert!(matches!(
        rng.range(5, 1),
        Err(PrngError::InvalidRange { .. })
    ));

    // Full-domain request: must neither divide by zero nor loop forever.
    rng.range(PcgRandom::RANDOM_MIN, PcgRandom::RANDOM_MAX)
        .unwrap();

    for _ in 0..PAIRS {
        let (min, max) = ordered_pair(rng.next(), rng.next());

        let value = rng.range(min, max).unwrap();
        assert!(value >= min, "{} below {}", value, min);
        assert!(value <= max, "{} above {}", value, max);
    }
}

/// Every value of a small interval appears with roughly equal frequency.
#[test]
fn test_pcg_range_is_uniform() {
    let mut rng = PcgRandom::new(0x5eed);
    let mut counts = [0u32; 7];
    let samples = 70_000;
    for _ in 0..samples {
        let value = rng.range(-3, 3).unwrap();
        counts[(value + 3) as usize] += 1;
    }

    let expected = samples as f64 / 7.0;
    for (i, &count) in counts.iter().enumerate() {
        let deviation = (f64::from(count) - expected).abs() / expected;
        assert!(deviation < 0.05, "bucket {} off by {:.3}", i, deviation);
    }
}

#[test]
fn test_legacy_range_is_uniform() {
    let mut rng = PseudoRandom::new(4242);
    let mut counts = [0u32; 10];
    let samples = 50_000;
    for _ in 0..samples {
        let value = rng.range(0, 9).unwrap();
        counts[value as usize] += 1;
    }

    let expected = samples as f64 / 10.0;
    for &count in &counts {
        assert!((f64::from(count) - expected).abs() / expected < 0.05);
    }
}
