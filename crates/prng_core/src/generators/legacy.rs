//! Legacy linear congruential generator.

use crate::error::PrngError;
use crate::sampling::{sample_range, RawGenerator};
use crate::seed::{time_seed, Clock};

/// Linear congruential generator with a 32-bit signed state and 15-bit
/// output.
///
/// Each step computes `state = state * 1103515245 + 12345` with two's
/// complement wraparound and returns `(state / 65536) mod 32768`.
///
/// # Examples
///
/// ```rust
/// use prng_core::PseudoRandom;
///
/// let mut rng = PseudoRandom::new(814538);
/// assert_eq!(rng.next(), 0x02fa);
/// assert_eq!(rng.next(), 0x60d5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PseudoRandom {
    state: i32,
}

impl PseudoRandom {
    /// Largest value returned by [`next`](Self::next).
    pub const RANDOM_MAX: u32 = 0x7fff;

    /// Largest `max - min` span accepted by [`range`](Self::range).
    ///
    /// A 32768-value domain cannot spread evenly over wide intervals, so
    /// spans are capped at a tenth of it.
    pub const MAX_RANGE_SPAN: u32 = (Self::RANDOM_MAX + 1) / 10;

    /// Creates a generator whose state is exactly `seed`.
    #[inline]
    pub fn new(seed: i32) -> Self {
        Self { state: seed }
    }

    /// Creates a generator seeded from the clock's current Unix time,
    /// truncated to 32 bits.
    pub fn from_clock<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::new(time_seed(clock) as i32)
    }

    /// Restarts the sequence from `seed`.
    #[inline]
    pub fn reseed(&mut self, seed: i32) {
        self.state = seed;
    }

    /// Returns the current state word; passing it to [`new`](Self::new)
    /// resumes the sequence from this point.
    #[inline]
    pub fn seed(&self) -> i32 {
        self.state
    }

    /// Advances the generator and returns a value in `[0, 32767]`.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        // Truncating division, then reinterpretation: identical to the C
        // expression `(unsigned)(state / 65536) % 32768`.
        (self.state / 65_536) as u32 % (Self::RANDOM_MAX + 1)
    }

    /// Returns a value in `[min, max]`.
    ///
    /// # Errors
    ///
    /// - [`PrngError::InvalidRange`] if `min > max`
    /// - [`PrngError::RangeTooLarge`] if `max - min` exceeds
    ///   [`MAX_RANGE_SPAN`](Self::MAX_RANGE_SPAN)
    ///
    /// The state is unchanged when an error is returned.
    pub fn range(&mut self, min: i32, max: i32) -> Result<i32, PrngError> {
        sample_range(self, min, max)
    }
}

impl RawGenerator for PseudoRandom {
    const DOMAIN: u64 = Self::RANDOM_MAX as u64 + 1;
    const MAX_SPAN: u32 = Self::MAX_RANGE_SPAN;

    #[inline]
    fn next_raw(&mut self) -> u32 {
        self.next()
    }
}
