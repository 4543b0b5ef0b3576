//! Stock price grid and Monte Carlo terminal prices.

use crate::models::{Distribution, MarketModel};
use ol_core::{Price, Real};
use ol_math::MersenneTwisterRng;
use std::f64::consts::SQRT_2;

/// Prices from `min` to `max` inclusive, one cent apart.
///
/// Point `i` is `(round(100·min) + i) / 100`, so every point is an exact
/// cent value regardless of accumulated rounding.
pub fn price_grid(min: Price, max: Price) -> Vec<Price> {
    if !(min.is_finite() && max.is_finite()) || max < min {
        return Vec::new();
    }
    let first = (min * 100.0).round();
    let n = ((max - min) * 100.0).round() as usize + 1;
    (0..n).map(|i| (first + i as Real) / 100.0).collect()
}

/// Draw `n` terminal prices at the model horizon.
///
/// - black-scholes: `S·exp((r − q − σ²/2)τ + σ√τ·Z)`
/// - normal: `S·(1 + (r − q)τ + σ√τ·Z)`
/// - laplace: `S·exp(Y)` with `Y ~ Laplace((r − q − σ²/2)τ, σ√τ/√2)`
///
/// Returns `None` for [`Distribution::Array`], whose samples are supplied by
/// the caller. Non-positive prices are not clipped.
pub fn sample_terminal_prices(
    model: &MarketModel,
    distribution: Distribution,
    n: usize,
    rng: &mut MersenneTwisterRng,
) -> Option<Vec<Price>> {
    let s = model.spot;
    let drift = model.log_drift();
    let sd = model.log_std_dev();
    let samples = match distribution {
        Distribution::BlackScholes => (0..n)
            .map(|_| s * (drift + sd * rng.next_normal()).exp())
            .collect(),
        Distribution::Normal => {
            let mean = (model.rate - model.dividend_yield) * model.time;
            (0..n).map(|_| s * (1.0 + mean + sd * rng.next_normal())).collect()
        }
        Distribution::Laplace => {
            let scale = sd / SQRT_2;
            (0..n)
                .map(|_| s * rng.next_laplace(drift, scale).exp())
                .collect()
        }
        Distribution::Array => return None,
    };
    Some(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ol_math::Statistics;

    fn model() -> MarketModel {
        MarketModel {
            spot: 100.0,
            volatility: 0.3,
            rate: 0.05,
            dividend_yield: 0.01,
            time: 0.5,
        }
    }

    #[test]
    fn grid_is_cent_spaced_and_inclusive() {
        let grid = price_grid(68.99, 268.99);
        assert_eq!(grid.len(), 20_001);
        assert_eq!(grid[0], 68.99);
        assert_eq!(grid[1], 69.0);
        assert_eq!(grid[9591], 164.9);
        assert_eq!(*grid.last().unwrap(), 268.99);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn degenerate_grids() {
        assert_eq!(price_grid(10.0, 10.0), vec![10.0]);
        assert!(price_grid(10.0, 9.0).is_empty());
        assert!(price_grid(f64::NAN, 9.0).is_empty());
    }

    #[test]
    fn samples_are_reproducible() {
        let a = sample_terminal_prices(
            &model(),
            Distribution::BlackScholes,
            500,
            &mut MersenneTwisterRng::new(3),
        );
        let b = sample_terminal_prices(
            &model(),
            Distribution::BlackScholes,
            500,
            &mut MersenneTwisterRng::new(3),
        );
        assert_eq!(a, b);
        assert_eq!(a.map(|v| v.len()), Some(500));
    }

    #[test]
    fn array_distribution_is_not_sampled() {
        let mut rng = MersenneTwisterRng::new(1);
        assert!(sample_terminal_prices(&model(), Distribution::Array, 10, &mut rng).is_none());
    }

    #[test]
    fn sample_means_match_forward() {
        // All three models share the forward S·e^{(r−q)τ} to first order
        let m = model();
        let forward = m.spot * ((m.rate - m.dividend_yield) * m.time).exp();
        for distribution in [Distribution::BlackScholes, Distribution::Normal] {
            let mut rng = MersenneTwisterRng::new(99);
            let stats: Statistics = sample_terminal_prices(&m, distribution, 100_000, &mut rng)
                .unwrap()
                .into_iter()
                .collect();
            assert_abs_diff_eq!(stats.mean().unwrap(), forward, epsilon = 0.5);
        }
        let mut rng = MersenneTwisterRng::new(99);
        let stats: Statistics = sample_terminal_prices(&m, Distribution::Laplace, 100_000, &mut rng)
            .unwrap()
            .into_iter()
            .map(f64::ln)
            .collect();
        let log_mean = m.spot.ln() + m.log_drift();
        assert_abs_diff_eq!(stats.mean().unwrap(), log_mean, epsilon = 0.005);
        assert_abs_diff_eq!(stats.std_dev().unwrap(), m.log_std_dev(), epsilon = 0.005);
    }
}
