//! # Sampling on top of raw generator output
//!
//! Both generators expose a fixed raw output domain. This module maps that
//! domain onto caller-chosen intervals and distributions:
//!
//! - [`range`]: bias-free sampling of a closed interval `[min, max]`
//! - [`distribution`]: approximate normal sampling by averaging range draws
//!
//! Sampling is generic over [`RawGenerator`], so the same rejection logic
//! serves the 15-bit legacy generator and the 32-bit PCG generator.

pub mod distribution;
pub mod range;

pub use distribution::NormalApprox;
pub use range::{sample_bounded, sample_range, RawGenerator};
