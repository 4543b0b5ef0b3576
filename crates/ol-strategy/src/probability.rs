//! Probability that the terminal stock price lands in a set of ranges.

use crate::models::{Distribution, MarketModel, ProfitRange};
use ol_core::{validate, Price, Probability, Real, Result};
use ol_math::{laplace_cdf, normal_cdf};
use std::f64::consts::SQRT_2;

const MIN_STD_DEV: Real = 1e-10;

/// Probability mass of `ranges` under `distribution`.
///
/// - black-scholes: lognormal with log-mean `ln S + (r − q − σ²/2)τ` and
///   log-sd `σ√τ`
/// - normal: mean `S(1 + (r − q)τ)` and sd `Sσ√τ`, lower bounds clipped at 0
/// - laplace: log-Laplace with the lognormal log-mean and scale `σ√τ/√2`
/// - array: fraction of `samples` falling in any range
///
/// The ranges are assumed disjoint; their masses are summed.
///
/// # Errors
/// [`ol_core::Error::Validation`] for the array model when `samples` is
/// empty.
pub fn probability_of_ranges(
    ranges: &[ProfitRange],
    distribution: Distribution,
    model: &MarketModel,
    samples: &[Price],
) -> Result<Probability> {
    if distribution == Distribution::Array {
        validate!(
            !samples.is_empty(),
            "no terminal stock prices to compute probabilities from"
        );
        let hits = samples
            .iter()
            .filter(|&&s| ranges.iter().any(|r| r.contains(s)))
            .count();
        return Ok(hits as Real / samples.len() as Real);
    }

    let mass: Real = ranges
        .iter()
        .map(|r| range_mass(r, distribution, model))
        .sum();
    Ok(mass)
}

fn range_mass(range: &ProfitRange, distribution: Distribution, model: &MarketModel) -> Probability {
    let log_sd = match model.log_std_dev() {
        sd if sd > 0.0 => sd,
        _ => MIN_STD_DEV,
    };
    let log_mean = model.spot.ln() + model.log_drift();

    match distribution {
        Distribution::BlackScholes => {
            let cdf = |x: Price| log_cdf(x, |y| normal_cdf((y - log_mean) / log_sd));
            cdf(range.high) - cdf(range.low)
        }
        Distribution::Laplace => {
            let scale = log_sd / SQRT_2;
            let cdf = |x: Price| log_cdf(x, |y| laplace_cdf(y, log_mean, scale));
            cdf(range.high) - cdf(range.low)
        }
        Distribution::Normal => {
            let mean = model.spot * (1.0 + (model.rate - model.dividend_yield) * model.time);
            let sd = match model.spot * model.log_std_dev() {
                sd if sd > 0.0 => sd,
                _ => MIN_STD_DEV,
            };
            let cdf = |x: Price| normal_cdf((x - mean) / sd);
            cdf(range.high) - cdf(range.low.max(0.0))
        }
        Distribution::Array => 0.0,
    }
}

/// CDF of a positive price whose logarithm has CDF `f`.
fn log_cdf(x: Price, f: impl Fn(Real) -> Probability) -> Probability {
    if x <= 0.0 {
        0.0
    } else if x == Real::INFINITY {
        1.0
    } else {
        f(x.ln())
    }
}
