//! Theoretical option chains.
//!
//! A chain is `n` equally spaced strikes between the lowest and highest
//! strike, rounded to cents, each priced with [`black_scholes`].

use crate::black_scholes::{black_scholes, BlackScholesInputs};
use ol_core::{ensure, Price, Rate, Real, Result, Time, Volatility};
use serde::{Deserialize, Serialize};

/// Parameters of a Black-Scholes option chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSpec {
    /// Spot price of the underlying.
    pub spot: Price,
    /// Lowest strike.
    pub min_strike: Price,
    /// Highest strike.
    pub max_strike: Price,
    /// Annualized volatility.
    pub volatility: Volatility,
    /// Annualized risk-free rate.
    pub rate: Rate,
    /// Time to maturity in years.
    pub time: Time,
    /// Number of strikes.
    pub n: usize,
    /// Annualized dividend yield.
    #[serde(default)]
    pub dividend_yield: Rate,
}

/// Per-strike quotes of one side (calls or puts) of a chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChainQuotes {
    /// Theoretical prices.
    pub price: Vec<Price>,
    /// Deltas.
    pub delta: Vec<Real>,
    /// Thetas, per year.
    pub theta: Vec<Real>,
}

/// A Black-Scholes option chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptionChain {
    /// Strikes, rounded to cents.
    pub strikes: Vec<Price>,
    /// Call quotes.
    pub calls: ChainQuotes,
    /// Put quotes.
    pub puts: ChainQuotes,
    /// Gammas, shared by calls and puts.
    pub gamma: Vec<Real>,
    /// Vegas per unit of volatility, shared by calls and puts.
    pub vega: Vec<Real>,
}

/// Build an equally spaced option chain.
///
/// # Errors
/// Returns [`ol_core::Error::Precondition`] if fewer than two strikes are
/// requested, the strike range is empty or non-positive, or the spot is not
/// positive.
pub fn bs_option_chain(spec: &ChainSpec) -> Result<OptionChain> {
    ensure!(spec.n >= 2, "an option chain needs at least 2 strikes, got {}", spec.n);
    ensure!(
        spec.min_strike > 0.0 && spec.max_strike > spec.min_strike,
        "strike range [{}, {}] must be positive and non-empty",
        spec.min_strike,
        spec.max_strike
    );
    ensure!(spec.spot > 0.0, "spot price must be positive, got {}", spec.spot);

    let step = (spec.max_strike - spec.min_strike) / (spec.n - 1) as Real;
    let mut chain = OptionChain::default();
    for i in 0..spec.n {
        let strike = round_to_cents(spec.min_strike + i as Real * step);
        let info = black_scholes(&BlackScholesInputs {
            spot: spec.spot,
            strike,
            rate: spec.rate,
            volatility: spec.volatility,
            time: spec.time,
            dividend_yield: spec.dividend_yield,
        });
        chain.strikes.push(strike);
        chain.calls.price.push(info.call_price);
        chain.calls.delta.push(info.call_delta);
        chain.calls.theta.push(info.call_theta);
        chain.puts.price.push(info.put_price);
        chain.puts.delta.push(info.put_delta);
        chain.puts.theta.push(info.put_theta);
        chain.gamma.push(info.gamma);
        chain.vega.push(info.vega);
    }
    Ok(chain)
}

fn round_to_cents(x: Real) -> Real {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn spec() -> ChainSpec {
        ChainSpec {
            spot: 100.0,
            min_strike: 80.0,
            max_strike: 120.0,
            volatility: 0.25,
            rate: 0.04,
            time: 0.25,
            n: 9,
            dividend_yield: 0.0,
        }
    }

    #[test]
    fn strikes_are_equally_spaced() {
        let chain = bs_option_chain(&spec()).unwrap();
        assert_eq!(
            chain.strikes,
            vec![80.0, 85.0, 90.0, 95.0, 100.0, 105.0, 110.0, 115.0, 120.0]
        );
        assert_eq!(chain.calls.price.len(), 9);
        assert_eq!(chain.vega.len(), 9);
    }

    #[test]
    fn strikes_round_to_cents() {
        let chain = bs_option_chain(&ChainSpec {
            min_strike: 100.0,
            max_strike: 101.0,
            n: 4,
            ..spec()
        })
        .unwrap();
        assert_eq!(chain.strikes, vec![100.0, 100.33, 100.67, 101.0]);
    }

    #[test]
    fn quotes_satisfy_parity() {
        let s = spec();
        let chain = bs_option_chain(&s).unwrap();
        let df = (-s.rate * s.time).exp();
        for (i, &k) in chain.strikes.iter().enumerate() {
            let lhs = chain.calls.price[i] - chain.puts.price[i];
            assert_abs_diff_eq!(lhs, s.spot - k * df, epsilon = 1e-10);
            assert_abs_diff_eq!(chain.calls.delta[i] - chain.puts.delta[i], 1.0, epsilon = 1e-12);
        }
        // calls get cheaper with strike
        assert!(chain.calls.price.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn rejects_bad_specs() {
        assert!(bs_option_chain(&ChainSpec { n: 1, ..spec() }).is_err());
        assert!(bs_option_chain(&ChainSpec {
            max_strike: 70.0,
            ..spec()
        })
        .is_err());
        assert!(bs_option_chain(&ChainSpec { spot: 0.0, ..spec() }).is_err());
    }
}
