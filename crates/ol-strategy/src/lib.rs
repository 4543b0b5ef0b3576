//! # ol-strategy
//!
//! Profit/loss analysis of options-and-stock strategies on one underlying.
//!
//! - [`StrategyInputs`] — legs, market parameters and horizon, from JSON
//! - [`StrategyEngine`] — P/L curves, Greeks, profit ranges, probabilities
//! - [`generate_strategy`] — legs of common named strategies
//!
//! ```
//! use ol_core::Action;
//! use ol_pricing::OptionType;
//! use ol_strategy::{Horizon, StrategyEngine, StrategyInputs, StrategyLeg};
//!
//! let inputs = StrategyInputs::from_json(r#"{
//!     "stock_price": 100.0, "volatility": 0.25, "interest_rate": 0.04,
//!     "min_stock": 60.0, "max_stock": 140.0, "days_to_target": 20,
//!     "legs": [{"type": "call", "strike": 105.0, "premium": 1.5,
//!               "n": 100, "action": "buy"}]
//! }"#).unwrap();
//! assert_eq!(inputs.horizon, Horizon::Days { days_to_target: 20 });
//! assert_eq!(
//!     inputs.legs[0],
//!     StrategyLeg::option(OptionType::Call, Action::Buy, 105.0, 1.5, 100)
//! );
//!
//! let mut engine = StrategyEngine::new(inputs).unwrap();
//! let out = engine.run().unwrap();
//! assert_eq!(out.strategy_cost, -150.0);
//! assert_eq!(out.profit_ranges[0].low, 106.51);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Strategy engine.
pub mod engine;

/// Inputs, legs and outputs.
pub mod models;

/// Price grid and terminal price sampling.
pub mod price_domain;

/// Range probabilities under the price models.
pub mod probability;

/// Per-leg P/L profiles.
pub mod profile;

/// Profit range detection.
pub mod profit_range;

/// Named strategy templates.
pub mod strategies;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use engine::{LegPlan, StrategyEngine};
pub use models::{
    ClosedLeg, Distribution, Expiration, Horizon, MarketModel, OptionLeg, Outputs, ProfitRange,
    StockLeg, StrategyInputs, StrategyLeg,
};
pub use price_domain::{price_grid, sample_terminal_prices};
pub use probability::probability_of_ranges;
pub use profit_range::find_ranges;
pub use strategies::{generate_strategy, NamedStrategy, StrategyTemplate};
