//! Explicit wall-clock seed sources.
//!
//! Generators never read the system time on their own. Code that wants a
//! time-derived seed passes a [`Clock`] to `from_clock`; tests pass a
//! [`FixedClock`] and get a reproducible sequence.

use chrono::{DateTime, Utc};
use tracing::debug;

/// Abstraction over the current time for seed derivation.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Derives a seed from the clock: whole seconds since the Unix epoch.
///
/// Times before the epoch wrap to large values rather than failing.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use prng_core::seed::{time_seed, FixedClock};
///
/// let clock = FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap());
/// assert_eq!(time_seed(&clock), 1_700_000_000);
/// ```
pub fn time_seed<C: Clock + ?Sized>(clock: &C) -> u64 {
    let seconds = clock.now().timestamp();
    debug!(seed = seconds, "derived generator seed from clock");
    seconds as u64
}
