//! # ol-pricing
//!
//! European option analytics under Black-Scholes with a continuous dividend
//! yield.
//!
//! - [`black_scholes`] — prices, Greeks and in-the-money probabilities
//! - [`implied_volatility`] — total inversion of the pricing formula
//! - [`bs_option_chain`] — an equally spaced theoretical option chain

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Black-Scholes prices and Greeks.
pub mod black_scholes;

/// Theoretical option chain generation.
pub mod chain;

/// Implied volatility inversion.
pub mod implied_vol;

/// Call/put option type and terminal payoff.
pub mod payoff;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use black_scholes::{black_scholes, option_price, BlackScholesInfo, BlackScholesInputs};
pub use chain::{bs_option_chain, ChainQuotes, ChainSpec, OptionChain};
pub use implied_vol::implied_volatility;
pub use payoff::OptionType;
