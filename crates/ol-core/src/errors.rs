//! Error types for optionlab-rs.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below. The
//! [`ensure!`](crate::ensure) and [`validate!`](crate::validate) macros
//! cover the common early-return cases.

use thiserror::Error;

/// The top-level error type used throughout optionlab-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Malformed or contradictory strategy inputs.
    ///
    /// Raised atomically at engine construction or at `run()` entry; no
    /// partial result is ever produced alongside it.
    #[error("invalid strategy input: {0}")]
    Validation(String),

    /// Precondition of a numerical routine violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error, e.g. a solver running out of iterations.
    #[error("{0}")]
    Runtime(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Strategy inputs could not be parsed from JSON.
    #[error("malformed JSON input: {0}")]
    Json(String),
}

/// Shorthand `Result` type used throughout optionlab-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ol_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ol_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Validation(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ol_core::{validate, errors::Error};
/// fn legs(n: usize) -> ol_core::errors::Result<usize> {
///     validate!(n > 0, "no strategy legs provided");
///     Ok(n)
/// }
/// assert!(legs(2).is_ok());
/// assert!(matches!(legs(0), Err(Error::Validation(_))));
/// ```
#[macro_export]
macro_rules! validate {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Validation(
                format!($($msg)*)
            ));
        }
    };
}
