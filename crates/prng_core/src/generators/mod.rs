//! # Pseudo-random generators
//!
//! Two independent, self-contained generators:
//!
//! - [`legacy`]: [`PseudoRandom`], a 32-bit state linear congruential
//!   generator with 15-bit output. Kept for sequences that must match data
//!   generated with it.
//! - [`pcg`]: [`PcgRandom`], a PCG-XSH-RR generator with 64-bit state and
//!   32-bit output. Preferred for new code.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: output depends only on the seed arguments; no
//!   global or thread-local state is consulted
//! - **Value semantics**: generators are `Copy`; cloning forks the sequence
//! - **No locking**: an instance is mutable state for one owner; share across
//!   threads by giving each thread its own instance

pub mod legacy;
pub mod pcg;

pub use legacy::PseudoRandom;
pub use pcg::PcgRandom;
