//! Implied volatility inversion.
//!
//! [`implied_volatility`] is total: whenever no volatility reproduces the
//! premium it logs a warning and returns `0.0`.

use crate::black_scholes::{black_scholes, BlackScholesInputs};
use crate::payoff::OptionType;
use ol_core::{Price, Rate, Time, Volatility};
use ol_math::solvers1d::{bisection, newton_safe, SolverOptions};
use std::f64::consts::PI;
use tracing::warn;

/// Lower end of the volatility bracket.
pub const MIN_VOLATILITY: Volatility = 1.0e-4;
/// Upper end of the volatility bracket.
pub const MAX_VOLATILITY: Volatility = 10.0;

const ACCURACY: f64 = 1.0e-10;

/// Volatility that reproduces `premium` under Black-Scholes.
///
/// A safeguarded Newton iteration seeded with the Brenner–Subrahmanyam
/// approximation `√(2π/τ)·premium/S` runs first; bisection on
/// [`MIN_VOLATILITY`, `MAX_VOLATILITY`] is the fallback. Returns `0.0` when
/// the premium is below intrinsic value, when `τ ≤ 0`, or when no root
/// exists in the bracket.
pub fn implied_volatility(
    option_type: OptionType,
    premium: Price,
    spot: Price,
    strike: Price,
    rate: Rate,
    time: Time,
    dividend_yield: Rate,
) -> Volatility {
    let intrinsic = option_type.payoff(spot, strike);
    if !(premium.is_finite() && spot > 0.0 && strike > 0.0) {
        warn!(%option_type, premium, spot, strike, "implied volatility: invalid inputs");
        return 0.0;
    }
    if premium < intrinsic {
        warn!(
            %option_type, premium, intrinsic, strike,
            "implied volatility: premium below intrinsic value"
        );
        return 0.0;
    }
    if time <= 0.0 {
        warn!(%option_type, premium, time, "implied volatility: no time to maturity");
        return 0.0;
    }

    let price_at = |sigma: Volatility| {
        black_scholes(&BlackScholesInputs {
            spot,
            strike,
            rate,
            volatility: sigma,
            time,
            dividend_yield,
        })
    };
    let f_df = |sigma: Volatility| {
        let info = price_at(sigma);
        (info.price(option_type) - premium, info.vega)
    };
    let options = SolverOptions::with_accuracy(ACCURACY);

    let guess = (2.0 * PI / time).sqrt() * premium / spot;
    let newton = newton_safe(f_df, guess, MIN_VOLATILITY, MAX_VOLATILITY, options);
    let root = newton.or_else(|_| {
        bisection(
            |sigma| price_at(sigma).price(option_type) - premium,
            MIN_VOLATILITY,
            MAX_VOLATILITY,
            options,
        )
    });
    match root {
        Ok(sigma) => sigma,
        Err(e) => {
            warn!(%option_type, premium, strike, error = %e, "implied volatility not found");
            0.0
        }
    }
}
