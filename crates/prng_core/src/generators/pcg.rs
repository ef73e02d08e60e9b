//! Permuted congruential generator (PCG-XSH-RR 64/32).
//!
//! A 64-bit linear congruential state transition followed by an output
//! permutation: the high bits are folded with an xorshift and the 32-bit
//! result is rotated by an amount taken from the top five state bits.
//!
//! Reference: O'Neill, M. E. (2014). "PCG: A Family of Simple Fast
//! Space-Efficient Statistically Good Algorithms for Random Number
//! Generation". HMC-CS-2014-0905.

use rand::{RngCore, SeedableRng};

use crate::error::PrngError;
use crate::sampling::{sample_bounded, sample_range, NormalApprox, RawGenerator};
use crate::seed::{time_seed, Clock};

/// 64-bit LCG multiplier used by the reference PCG implementation.
const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// PCG-XSH-RR generator with 64-bit state and 32-bit output.
///
/// The stream increment is always odd, which gives the underlying LCG its
/// full `2^64` period for every sequence selector.
///
/// # Examples
///
/// ```rust
/// use prng_core::PcgRandom;
///
/// let mut rng = PcgRandom::with_sequence(814538, 998877);
/// assert_eq!(rng.next(), 0x48c5_93f8);
///
/// // Equal seeds replay equal sequences.
/// let mut a = PcgRandom::new(42);
/// let mut b = PcgRandom::new(42);
/// assert_eq!(a.next(), b.next());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRandom {
    state: u64,
    inc: u64,
}

impl PcgRandom {
    /// Smallest value returned by [`range`](Self::range).
    pub const RANDOM_MIN: i32 = i32::MIN;
    /// Largest value returned by [`range`](Self::range).
    pub const RANDOM_MAX: i32 = i32::MAX;
    /// Largest value returned by [`next`](Self::next).
    pub const RANDOM_RANGE: u32 = u32::MAX;

    /// Initial state used by [`Default`].
    pub const DEFAULT_STATE: u64 = 0x853c_49e6_748f_ea9b;
    /// Sequence selector used when none is given.
    pub const DEFAULT_SEQUENCE: u64 = 0xda3e_39cb_94b9_5bdb;

    /// Creates a generator from `seed` on the default sequence.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self::with_sequence(seed, Self::DEFAULT_SEQUENCE)
    }

    /// Creates a generator from `seed` on the stream selected by `sequence`.
    ///
    /// Distinct `sequence` values give statistically independent streams for
    /// the same seed. Only the low 63 bits of `sequence` are significant.
    pub fn with_sequence(seed: u64, sequence: u64) -> Self {
        let mut rng = Self { state: 0, inc: 0 };
        rng.reseed(seed, sequence);
        rng
    }

    /// Creates a generator seeded from the clock's current Unix time.
    pub fn from_clock<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::new(time_seed(clock))
    }

    /// Restarts the generator from `seed` on the stream `sequence`.
    ///
    /// The state is advanced once before and once after mixing in the seed;
    /// assigning the seed directly would make nearby seeds produce
    /// correlated first outputs.
    pub fn reseed(&mut self, seed: u64, sequence: u64) {
        self.state = 0;
        self.inc = (sequence << 1) | 1;
        self.step();
        self.state = self.state.wrapping_add(seed);
        self.step();
    }

    /// Returns the `[state, increment]` pair.
    #[inline]
    pub fn state(&self) -> [u64; 2] {
        [self.state, self.inc]
    }

    /// Restores a pair captured with [`state`](Self::state).
    ///
    /// The increment's low bit is forced on so the full-period property
    /// holds for any input.
    #[inline]
    pub fn set_state(&mut self, state: [u64; 2]) {
        self.state = state[0];
        self.inc = state[1] | 1;
    }

    #[inline]
    fn step(&mut self) -> u64 {
        let old = self.state;
        self.state = old.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);
        old
    }

    /// Advances the generator and returns the next 32-bit output.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        let old = self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Returns a value in `[0, bound)` without modulo bias.
    ///
    /// A `bound` of zero stands for `2^32` and returns [`next`](Self::next)
    /// unchanged.
    #[inline]
    pub fn bounded(&mut self, bound: u32) -> u32 {
        let bound = if bound == 0 {
            Self::DOMAIN
        } else {
            u64::from(bound)
        };
        sample_bounded(self, bound)
    }

    /// Returns a value in `[min, max]`.
    ///
    /// The full span `[RANDOM_MIN, RANDOM_MAX]` is accepted and costs exactly
    /// one draw.
    ///
    /// # Errors
    ///
    /// Returns [`PrngError::InvalidRange`] if `min > max`; the state is
    /// unchanged in that case.
    pub fn range(&mut self, min: i32, max: i32) -> Result<i32, PrngError> {
        sample_range(self, min, max)
    }

    /// Fills `dest` with generator output.
    ///
    /// Each 32-bit output is written low byte first. When `dest.len()` is not
    /// a multiple of four, the last output contributes only its low-order
    /// bytes. Pass a sub-slice to fill at an offset; bytes outside it are
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prng_core::PcgRandom;
    ///
    /// let mut buf = [0u8; 8];
    /// PcgRandom::with_sequence(1538, 877).bytes(&mut buf[2..5]);
    /// assert_eq!(buf, [0x00, 0x00, 0xf3, 0x79, 0x8f, 0x00, 0x00, 0x00]);
    /// ```
    pub fn bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    /// Returns an approximately normal value in `[min, max]`: the mean of
    /// `num_trials` range draws, rounded half away from zero.
    ///
    /// The result has mean `(min + max) / 2` and variance
    /// `(range² - 1) / (12 · num_trials)`. See [`NormalApprox`].
    ///
    /// # Errors
    ///
    /// - [`PrngError::InvalidRange`] if `min > max`
    /// - [`PrngError::InvalidTrialCount`] if `num_trials` is zero
    pub fn rand_normal_dist(
        &mut self,
        min: i32,
        max: i32,
        num_trials: u32,
    ) -> Result<i32, PrngError> {
        NormalApprox::new(min, max, num_trials)?.sample(self)
    }
}

impl Default for PcgRandom {
    fn default() -> Self {
        Self::with_sequence(Self::DEFAULT_STATE, Self::DEFAULT_SEQUENCE)
    }
}

impl RawGenerator for PcgRandom {
    const DOMAIN: u64 = 1 << 32;
    const MAX_SPAN: u32 = u32::MAX;

    #[inline]
    fn next_raw(&mut self) -> u32 {
        self.next()
    }
}

impl RngCore for PcgRandom {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    /// Two outputs, the first in the low half.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next());
        let high = u64::from(self.next());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.bytes(dest);
        Ok(())
    }
}

impl SeedableRng for PcgRandom {
    /// Little-endian seed word followed by little-endian sequence word.
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut seed_word = [0u8; 8];
        let mut sequence_word = [0u8; 8];
        seed_word.copy_from_slice(&seed[..8]);
        sequence_word.copy_from_slice(&seed[8..]);
        Self::with_sequence(
            u64::from_le_bytes(seed_word),
            u64::from_le_bytes(sequence_word),
        )
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
