//! Error types for bounded and distribution sampling.

use thiserror::Error;

/// Errors raised by generator sampling operations.
///
/// Every variant is detected before the generator is advanced, so a failed
/// call never consumes output from the sequence.
///
/// # Variants
///
/// - `InvalidRange`: lower bound greater than upper bound
/// - `RangeTooLarge`: span wider than the generator can sample uniformly
/// - `InvalidTrialCount`: normal approximation requested with zero trials
///
/// # Examples
///
/// ```
/// use prng_core::PrngError;
///
/// let err = PrngError::InvalidRange { min: 5, max: 1 };
/// assert_eq!(format!("{}", err), "Invalid range: min 5 is greater than max 1");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrngError {
    /// The requested lower bound exceeds the upper bound.
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound
        min: i32,
        /// Requested upper bound
        max: i32,
    },

    /// The requested span (`max - min`) exceeds the generator's limit.
    #[error("Range too large: span {span} exceeds limit {limit}")]
    RangeTooLarge {
        /// Requested span, `max - min`
        span: u32,
        /// Largest span the generator accepts
        limit: u32,
    },

    /// The normal approximation needs at least one trial.
    #[error("Invalid trial count {0}: must be at least 1")]
    InvalidTrialCount(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrngError::RangeTooLarge {
            span: 4000,
            limit: 3276,
        };
        assert_eq!(
            err.to_string(),
            "Range too large: span 4000 exceeds limit 3276"
        );

        let err = PrngError::InvalidTrialCount(0);
        assert!(err.to_string().contains("Invalid trial count 0"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&PrngError::InvalidRange { min: 1, max: 0 });
    }
}
