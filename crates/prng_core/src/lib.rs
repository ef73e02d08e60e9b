//! # prng_core: Deterministic Pseudo-Random Generation
//!
//! Reproducible pseudo-random number generators for procedural content and
//! simulation code that must replay bit-for-bit across builds and platforms.
//!
//! ## Generators
//!
//! - [`PseudoRandom`]: legacy 15-bit linear congruential generator
//! - [`PcgRandom`]: 64-bit state, 32-bit output permuted congruential
//!   generator (PCG-XSH-RR); the primary workhorse
//!
//! ## Sampling
//!
//! - [`sampling::range`]: bias-free bounded sampling shared by both
//!   generators through [`RawGenerator`]
//! - [`sampling::distribution`]: Irwin–Hall approximation of a normal
//!   distribution built from repeated range draws
//!
//! ## Determinism
//!
//! Identical seeds always reproduce identical output sequences. Seeding from
//! the wall clock is explicit (see [`seed`]) and never happens implicitly.
//!
//! Neither generator is suitable for cryptographic use.
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_core::{PcgRandom, PseudoRandom};
//!
//! let mut pcg = PcgRandom::with_sequence(814538, 998877);
//! assert_eq!(pcg.next(), 0x48c5_93f8);
//!
//! let mut legacy = PseudoRandom::new(814538);
//! assert_eq!(legacy.next(), 0x02fa);
//!
//! let roll = pcg.range(1, 6).expect("valid range");
//! assert!((1..=6).contains(&roll));
//! ```

pub mod error;
pub mod generators;
pub mod sampling;
pub mod seed;

pub use error::PrngError;
pub use generators::{PcgRandom, PseudoRandom};
pub use sampling::{NormalApprox, RawGenerator};
pub use seed::{Clock, FixedClock, SystemClock};
