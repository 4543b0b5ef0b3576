//! # optionlab
//!
//! Profit/loss and risk analytics for strategies built from stock and
//! European options on a single underlying.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `ol-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! optionlab = "0.1"
//! ```
//!
//! ```rust
//! use optionlab::strategy::{
//!     generate_strategy, NamedStrategy, StrategyEngine, StrategyInputs, StrategyTemplate,
//! };
//!
//! let mut inputs = StrategyInputs::from_json(r#"{
//!     "stock_price": 168.99, "volatility": 0.483, "interest_rate": 0.045,
//!     "min_stock": 68.99, "max_stock": 268.99,
//!     "start_date": "2023-01-16", "target_date": "2023-02-17",
//!     "legs": [{"type": "stock", "n": 100, "action": "buy"}]
//! }"#).unwrap();
//! inputs.legs = generate_strategy(
//!     NamedStrategy::CoveredCall,
//!     &StrategyTemplate::new(185.0, 4.1),
//! ).unwrap();
//!
//! let mut engine = StrategyEngine::new(inputs).unwrap();
//! assert_eq!(engine.days_to_target(), 23);
//! let out = engine.run().unwrap();
//! assert!((out.probability_of_profit - 0.549).abs() < 1e-3);
//! assert!((out.strategy_cost + 16489.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, trade actions and error definitions.
pub use ol_core as core;

/// Dates, holiday calendars and business-day counts.
pub use ol_time as time;

/// Distributions, root finders, random numbers and statistics.
pub use ol_math as math;

/// Black-Scholes analytics, implied volatility and option chains.
pub use ol_pricing as pricing;

/// Strategy inputs, the strategy engine and named strategies.
pub use ol_strategy as strategy;
