//! Probability distributions used by the pricing and probability layers.
//!
//! The standard normal is built on the `statrs` error functions; the Laplace
//! distribution wraps `statrs::distribution::Laplace`.

/// Laplace distribution.
pub mod laplace;
/// Standard normal distribution.
pub mod normal;

pub use laplace::laplace_cdf;
pub use normal::{normal_cdf, normal_pdf};
