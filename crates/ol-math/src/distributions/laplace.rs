//! Laplace (double-exponential) distribution.
//!
//! Wraps the `statrs` crate's Laplace implementation.

use ol_core::Real;
use statrs::distribution::{ContinuousCDF, Laplace};

/// Cumulative distribution of a Laplace variable with the given `location`
/// and `scale`.
///
/// A non-positive scale degenerates to a point mass at `location`.
pub fn laplace_cdf(x: Real, location: Real, scale: Real) -> Real {
    match Laplace::new(location, scale) {
        Ok(dist) if scale > 0.0 => dist.cdf(x),
        _ => {
            if x < location {
                0.0
            } else {
                1.0
            }
        }
    }
}

/// Inverse cumulative distribution of a Laplace variable.
///
/// `u` must lie in the open interval `(0, 1)`.
pub fn laplace_inverse_cdf(u: Real, location: Real, scale: Real) -> Real {
    let centred = u - 0.5;
    location - scale * centred.signum() * (1.0 - 2.0 * centred.abs()).ln()
}
