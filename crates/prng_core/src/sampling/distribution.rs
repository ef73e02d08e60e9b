//! Approximate normal sampling via the Irwin–Hall construction.
//!
//! The mean of `n` independent uniform draws from `[min, max]` has the
//! uniform's mean and `1/n` of its variance, and by the central limit
//! theorem tends to a Gaussian shape. Rounding the mean back to an integer
//! gives a discretised bell curve that never leaves `[min, max]` and needs
//! no floating-point transcendental functions.

use super::range::{checked_bound, offset_from, sample_bounded, RawGenerator};
use crate::error::PrngError;

/// A validated request for approximately normal integers in `[min, max]`.
///
/// # Examples
///
/// ```rust
/// use prng_core::{NormalApprox, PcgRandom};
///
/// let dist = NormalApprox::new(-120, 120, 20).unwrap();
/// let mut rng = PcgRandom::new(486179);
///
/// let value = dist.sample(&mut rng).unwrap();
/// assert!((-120..=120).contains(&value));
/// assert_eq!(dist.variance(), 242.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalApprox {
    min: i32,
    max: i32,
    num_trials: u32,
}

impl NormalApprox {
    /// Creates a request for `num_trials`-fold averaged draws on `[min, max]`.
    ///
    /// # Errors
    ///
    /// - [`PrngError::InvalidRange`] if `min > max`
    /// - [`PrngError::InvalidTrialCount`] if `num_trials` is zero
    pub fn new(min: i32, max: i32, num_trials: u32) -> Result<Self, PrngError> {
        if min > max {
            return Err(PrngError::InvalidRange { min, max });
        }
        if num_trials == 0 {
            return Err(PrngError::InvalidTrialCount(num_trials));
        }
        Ok(Self {
            min,
            max,
            num_trials,
        })
    }

    /// Lower bound of the output.
    #[inline]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound of the output.
    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of uniform draws averaged per sample.
    #[inline]
    pub fn num_trials(&self) -> u32 {
        self.num_trials
    }

    /// Mean of the approximated distribution, `(min + max) / 2`.
    pub fn mean(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }

    /// Variance of the approximated distribution,
    /// `(range² - 1) / (12 · num_trials)` with `range = max - min + 1`.
    pub fn variance(&self) -> f64 {
        let range = f64::from(self.max) - f64::from(self.min) + 1.0;
        (range * range - 1.0) / (12.0 * f64::from(self.num_trials))
    }

    /// Standard deviation of the approximated distribution.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Draws one sample: the mean of `num_trials` range draws, rounded half
    /// away from zero.
    ///
    /// # Errors
    ///
    /// Returns [`PrngError::RangeTooLarge`] if `[min, max]` is wider than
    /// `G` can sample; the generator is not advanced in that case.
    pub fn sample<G: RawGenerator + ?Sized>(&self, rng: &mut G) -> Result<i32, PrngError> {
        let bound = checked_bound::<G>(self.min, self.max)?;

        // At most 2^32 trials of |value| <= 2^31 each: fits in i64.
        let mut accum: i64 = 0;
        for _ in 0..self.num_trials {
            let value = offset_from(self.min, sample_bounded(rng, bound));
            accum += i64::from(value);
        }

        let mean = accum as f64 / f64::from(self.num_trials);
        Ok(mean.round() as i32)
    }
}
