//! Standard normal density and cumulative distribution.

use ol_core::Real;
use statrs::function::erf::{erf, erfc};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function Φ(x).
///
/// Near the origin `0.5 + 0.5·erf(x/√2)` is used; in the tails the
/// complementary error function keeps full relative precision.
///
/// The `statrs` error functions are accurate to about 2e-11 absolute around
/// `|x| ≈ 1`, so values there agree with exact references to ~1e-10.
pub fn normal_cdf(x: Real) -> Real {
    if x.is_nan() {
        return Real::NAN;
    }
    let z = x * FRAC_1_SQRT_2;
    if z.abs() < FRAC_1_SQRT_2 {
        0.5 + 0.5 * erf(z)
    } else {
        let tail = 0.5 * erfc(z.abs());
        if z > 0.0 {
            1.0 - tail
        } else {
            tail
        }
    }
}
