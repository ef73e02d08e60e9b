//! Bias-free bounded sampling.
//!
//! Reducing a raw draw modulo `bound` favours small results whenever the
//! domain size is not a multiple of `bound`. The sampler discards the
//! `domain % bound` lowest raw values and redraws, leaving a domain that is
//! an exact multiple of `bound`.

use crate::error::PrngError;

/// A generator with a fixed raw output domain `[0, DOMAIN)`.
pub trait RawGenerator {
    /// Number of distinct values [`next_raw`](Self::next_raw) can return.
    const DOMAIN: u64;

    /// Largest `max - min` span accepted by [`sample_range`].
    const MAX_SPAN: u32;

    /// Advances the generator and returns a value in `[0, DOMAIN)`.
    fn next_raw(&mut self) -> u32;
}

/// Draws a value in `[0, bound)` without modulo bias.
///
/// A `bound` equal to the full domain returns the raw draw directly, so no
/// modulus by a wrapped-to-zero bound and no rejection loop can occur.
///
/// `bound` must lie in `[1, G::DOMAIN]`.
pub fn sample_bounded<G: RawGenerator + ?Sized>(rng: &mut G, bound: u64) -> u32 {
    debug_assert!(bound >= 1 && bound <= G::DOMAIN, "bound {bound} outside domain");

    if bound == G::DOMAIN {
        return rng.next_raw();
    }

    // The rejected region is below `threshold`; it always holds fewer than
    // `bound` values, so the loop terminates with probability 1.
    let threshold = G::DOMAIN % bound;
    loop {
        let raw = u64::from(rng.next_raw());
        if raw >= threshold {
            return (raw % bound) as u32;
        }
    }
}

/// Draws a value in the closed interval `[min, max]`.
///
/// # Errors
///
/// - [`PrngError::InvalidRange`] if `min > max`
/// - [`PrngError::RangeTooLarge`] if `max - min` exceeds `G::MAX_SPAN`
///
/// The generator is not advanced when an error is returned.
pub fn sample_range<G: RawGenerator + ?Sized>(
    rng: &mut G,
    min: i32,
    max: i32,
) -> Result<i32, PrngError> {
    let bound = checked_bound::<G>(min, max)?;
    Ok(offset_from(min, sample_bounded(rng, bound)))
}

/// Validates `[min, max]` for `G` and returns the interval size.
///
/// Computed in 64 bits: the full `i32` span has size `2^32`.
pub(crate) fn checked_bound<G: RawGenerator + ?Sized>(
    min: i32,
    max: i32,
) -> Result<u64, PrngError> {
    if min > max {
        return Err(PrngError::InvalidRange { min, max });
    }

    let span = (i64::from(max) - i64::from(min)) as u64;
    if span > u64::from(G::MAX_SPAN) {
        return Err(PrngError::RangeTooLarge {
            span: span as u32,
            limit: G::MAX_SPAN,
        });
    }

    Ok(span + 1)
}

/// `min + offset` in two's complement; exact for any offset below the bound.
#[inline]
pub(crate) fn offset_from(min: i32, offset: u32) -> i32 {
    min.wrapping_add(offset as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of raw values over a 16-value domain.
    struct Scripted {
        values: Vec<u32>,
        index: usize,
    }

    impl Scripted {
        fn new(values: Vec<u32>) -> Self {
            Self { values, index: 0 }
        }
    }

    impl RawGenerator for Scripted {
        const DOMAIN: u64 = 16;
        const MAX_SPAN: u32 = 15;

        fn next_raw(&mut self) -> u32 {
            let value = self.values[self.index];
            self.index += 1;
            value
        }
    }

    #[test]
    fn test_rejects_values_below_threshold() {
        // 16 % 5 == 1, so raw 0 is rejected and 7 maps to 7 % 5.
        let mut rng = Scripted::new(vec![0, 7]);
        assert_eq!(sample_bounded(&mut rng, 5), 2);
        assert_eq!(rng.index, 2);
    }

    #[test]
    fn test_exact_divisor_never_rejects() {
        let mut rng = Scripted::new(vec![0, 13]);
        assert_eq!(sample_bounded(&mut rng, 4), 0);
        assert_eq!(sample_bounded(&mut rng, 4), 1);
    }

    #[test]
    fn test_full_domain_bypasses_modulo() {
        let mut rng = Scripted::new(vec![15]);
        assert_eq!(sample_bounded(&mut rng, 16), 15);
        assert_eq!(rng.index, 1);
    }

    #[test]
    fn test_sample_range_offsets_by_min() {
        let mut rng = Scripted::new(vec![9]);
        assert_eq!(sample_range(&mut rng, -3, 12).unwrap(), 6);
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = Scripted::new(vec![11]);
        assert_eq!(sample_range(&mut rng, 42, 42).unwrap(), 42);
    }

    #[test]
    fn test_errors_consume_nothing() {
        let mut rng = Scripted::new(vec![]);
        assert_eq!(
            sample_range(&mut rng, 5, 1),
            Err(PrngError::InvalidRange { min: 5, max: 1 })
        );
        assert_eq!(
            sample_range(&mut rng, 0, 16),
            Err(PrngError::RangeTooLarge { span: 16, limit: 15 })
        );
        assert_eq!(rng.index, 0);
    }

    #[test]
    fn test_checked_bound_full_i32_span() {
        struct Wide;
        impl RawGenerator for Wide {
            const DOMAIN: u64 = 1 << 32;
            const MAX_SPAN: u32 = u32::MAX;
            fn next_raw(&mut self) -> u32 {
                0
            }
        }

        assert_eq!(checked_bound::<Wide>(i32::MIN, i32::MAX).unwrap(), 1 << 32);
        assert_eq!(offset_from(i32::MIN, u32::MAX), i32::MAX);
    }
}
