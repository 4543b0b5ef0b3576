//! # ol-math
//!
//! Numerical building blocks for optionlab-rs: the standard normal and
//! Laplace distributions (via `statrs`), bracketed 1D root finders, a
//! seedable Mersenne Twister sampler (via `rand_mt` / `rand_distr`), and a
//! running statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Random number generators.
pub mod random_numbers;

/// 1D root-finding solvers.
pub mod solvers1d;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{laplace_cdf, normal_cdf, normal_pdf};
pub use random_numbers::MersenneTwisterRng;
pub use solvers1d::SolverOptions;
pub use statistics::Statistics;
