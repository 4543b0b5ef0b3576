//! Bracketed 1D root finders.
//!
//! Both solvers require `f(lo)` and `f(hi)` to have opposite signs and stop
//! after [`SolverOptions::max_iterations`] steps with [`Error::Runtime`].

use ol_core::{
    errors::{Error, Result},
    Real,
};

const MAX_ITERATIONS: u32 = 100;
const DEFAULT_ACCURACY: Real = 1.0e-11;

/// Convergence settings shared by the solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    /// Absolute tolerance on the root and on `|f(x)|`.
    pub accuracy: Real,
    /// Iteration budget.
    pub max_iterations: u32,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            accuracy: DEFAULT_ACCURACY,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl SolverOptions {
    /// Options with the given accuracy and the default iteration budget.
    pub fn with_accuracy(accuracy: Real) -> Self {
        Self {
            accuracy: if accuracy > 0.0 {
                accuracy
            } else {
                DEFAULT_ACCURACY
            },
            ..Self::default()
        }
    }
}

fn check_bracket(name: &str, lo: Real, hi: Real, flo: Real, fhi: Real) -> Result<()> {
    if !(flo.is_finite() && fhi.is_finite()) {
        return Err(Error::Precondition(format!(
            "{name}: non-finite function value at the bracket ends"
        )));
    }
    if flo * fhi > 0.0 {
        return Err(Error::Precondition(format!(
            "{name}: f({lo}) and f({hi}) must have opposite signs"
        )));
    }
    Ok(())
}

// ── Bisection ────────────────────────────────────────────────────────────────

/// Bisection on `[lo, hi]`.
pub fn bisection<F>(f: F, lo: Real, hi: Real, options: SolverOptions) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let mut a = lo;
    let mut b = hi;
    let fa = f(a);
    let fb = f(b);
    check_bracket("Bisection", lo, hi, fa, fb)?;
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }

    let mut fa = fa;
    for _ in 0..options.max_iterations {
        let mid = 0.5 * (a + b);
        let fm = f(mid);
        if fm == 0.0 || 0.5 * (b - a) < options.accuracy {
            return Ok(mid);
        }
        if fm * fa > 0.0 {
            a = mid;
            fa = fm;
        } else {
            b = mid;
        }
    }
    Err(Error::Runtime(
        "Bisection solver: maximum iterations reached".into(),
    ))
}

// ── Newton-Safe ──────────────────────────────────────────────────────────────

/// Safeguarded Newton-Raphson on `[lo, hi]` starting from `guess`.
///
/// `f_df` returns the function value and its derivative. A Newton step that
/// would leave the current bracket, or that shrinks the step more slowly
/// than bisection would, is replaced by a bisection step.
pub fn newton_safe<F>(
    f_df: F,
    guess: Real,
    lo: Real,
    hi: Real,
    options: SolverOptions,
) -> Result<Real>
where
    F: Fn(Real) -> (Real, Real),
{
    let (flo, _) = f_df(lo);
    let (fhi, _) = f_df(hi);
    check_bracket("NewtonSafe", lo, hi, flo, fhi)?;
    if flo == 0.0 {
        return Ok(lo);
    }
    if fhi == 0.0 {
        return Ok(hi);
    }

    // Orient so that f(xl) < 0
    let (mut xl, mut xh) = if flo < 0.0 { (lo, hi) } else { (hi, lo) };

    let mut x = if guess > lo.min(hi) && guess < lo.max(hi) {
        guess
    } else {
        0.5 * (lo + hi)
    };
    let mut dx_old = (hi - lo).abs();
    let mut dx = dx_old;
    let (mut fx, mut dfx) = f_df(x);

    for _ in 0..options.max_iterations {
        if fx.abs() < options.accuracy {
            return Ok(x);
        }
        let newton_out_of_range = ((x - xh) * dfx - fx) * ((x - xl) * dfx - fx) > 0.0;
        let bisection_faster = (2.0 * fx).abs() > (dx_old * dfx).abs();

        dx_old = dx;
        if newton_out_of_range || bisection_faster || !dfx.is_finite() {
            dx = 0.5 * (xh - xl);
            x = xl + dx;
        } else {
            dx = fx / dfx;
            x -= dx;
        }
        if dx.abs() < options.accuracy {
            return Ok(x);
        }

        (fx, dfx) = f_df(x);
        if fx < 0.0 {
            xl = x;
        } else {
            xh = x;
        }
    }
    Err(Error::Runtime(
        "NewtonSafe solver: maximum iterations reached".into(),
    ))
}
