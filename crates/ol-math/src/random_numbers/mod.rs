//! Random number generation.
//!
//! [`MersenneTwisterRng`] wraps the MT19937-64 generator from `rand_mt` and
//! draws uniform, standard normal (`rand_distr::StandardNormal`) and Laplace
//! deviates. Identical seeds yield identical streams.

use crate::distributions::laplace::laplace_inverse_cdf;
use ol_core::Real;
use rand::Rng;
use rand_distr::StandardNormal;
use rand_mt::Mt19937GenRand64;

/// A seedable pseudo-random generator based on the Mersenne Twister
/// MT19937-64 algorithm.
#[derive(Clone)]
pub struct MersenneTwisterRng {
    rng: Mt19937GenRand64,
    seed: u64,
}

impl std::fmt::Debug for MersenneTwisterRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MersenneTwisterRng")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl MersenneTwisterRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
            seed,
        }
    }

    /// Create a generator seeded from `seed`, or from fresh OS entropy when
    /// `seed` is `None`.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(rand::random))
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next uniform deviate in `[0, 1)`.
    pub fn next_uniform(&mut self) -> Real {
        self.rng.gen::<f64>()
    }

    /// Next standard normal deviate.
    pub fn next_normal(&mut self) -> Real {
        self.rng.sample(StandardNormal)
    }

    /// Next Laplace deviate with the given location and scale, drawn by
    /// inverting the cumulative distribution.
    pub fn next_laplace(&mut self, location: Real, scale: Real) -> Real {
        let u = loop {
            let u = self.next_uniform();
            if u > 0.0 {
                break u;
            }
        };
        laplace_inverse_cdf(u, location, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::Statistics;

    #[test]
    fn uniform_range() {
        let mut rng = MersenneTwisterRng::new(42);
        for _ in 0..1_000 {
            let x = rng.next_uniform();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = MersenneTwisterRng::new(7);
        let mut b = MersenneTwisterRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_normal(), b.next_normal());
        }
        let mut c = MersenneTwisterRng::from_optional_seed(Some(7));
        let mut d = MersenneTwisterRng::new(7);
        assert_eq!(c.next_laplace(0.0, 1.0), d.next_laplace(0.0, 1.0));
        assert_eq!(c.seed(), 7);
    }

    #[test]
    fn normal_moments() {
        let mut rng = MersenneTwisterRng::new(42);
        let mut stats = Statistics::new();
        for _ in 0..20_000 {
            stats.add(rng.next_normal());
        }
        assert!(stats.mean().unwrap().abs() < 0.05, "mean {:?}", stats.mean());
        assert!((stats.variance().unwrap() - 1.0).abs() < 0.05);
    }

    #[test]
    fn laplace_moments() {
        // Laplace(μ, b): mean μ, variance 2b²
        let (mu, b) = (0.2, 0.5);
        let mut rng = MersenneTwisterRng::new(11);
        let mut stats = Statistics::new();
        for _ in 0..50_000 {
            stats.add(rng.next_laplace(mu, b));
        }
        assert!((stats.mean().unwrap() - mu).abs() < 0.02);
        assert!((stats.variance().unwrap() - 2.0 * b * b).abs() < 0.03);
    }
}
