//! # ol-core
//!
//! Core types and error definitions for optionlab-rs.
//!
//! This crate provides the building blocks shared across the workspace:
//! primitive type aliases, the error hierarchy with its early-return macros,
//! and the buy/sell [`Action`] of a strategy leg.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Buy / sell action of a strategy leg.
pub mod action;

/// Error types and the `ensure!` / `validate!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

/// A probability in `[0, 1]`.
pub type Probability = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use action::Action;
pub use errors::{Error, Result};
