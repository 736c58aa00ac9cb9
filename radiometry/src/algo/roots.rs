//! Bracketed root finding for scalar transcendental equations.
//!
//! Only bisection is provided. The equations solved in this crate are smooth
//! and have a single sign change inside fixed brackets.

use thiserror::Error;

/// Default absolute tolerance on the root location.
pub const DEFAULT_TOLERANCE: f64 = 1e-14;

/// Upper bound on bisection steps before giving up.
pub const MAX_ITERATIONS: usize = 200;

/// Errors that can occur while searching for a root
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RootError {
    #[error("Bracket bounds must be finite and ascending, got [{0}, {1}]")]
    InvalidBracket(f64, f64),

    #[error("No sign change in bracket [{lower}, {upper}]: f = {f_lower:e}, {f_upper:e}")]
    NoSignChange {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },

    #[error("Bisection did not converge within {0} iterations")]
    MaxIterations(usize),
}

/// A located root together with the work it took to find it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// Abscissa of the root
    pub x: f64,

    /// Number of function evaluations inside the bisection loop
    pub iterations: usize,
}

/// Find a root of `f` inside `[lower, upper]` by bisection.
///
/// The bracket must contain a sign change of `f`. Iteration stops when the
/// half-width of the bracket falls below `tolerance`, when `f` evaluates to
/// exactly zero, or when the midpoint can no longer be separated from the
/// bracket ends in double precision.
///
/// # Arguments
/// * `f` - Continuous function whose root is wanted
/// * `lower` - Lower end of the bracket
/// * `upper` - Upper end of the bracket
/// * `tolerance` - Absolute tolerance on the root location
///
/// # Returns
/// * `Ok(Root)` - Root location and iteration count
/// * `Err(RootError)` - Invalid bracket, no sign change, or no convergence
pub fn bisect<F>(f: F, lower: f64, upper: f64, tolerance: f64) -> Result<Root, RootError>
where
    F: Fn(f64) -> f64,
{
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(RootError::InvalidBracket(lower, upper));
    }

    let mut lo = lower;
    let mut hi = upper;
    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if f_lo == 0.0 {
        return Ok(Root { x: lo, iterations: 0 });
    }
    if f_hi == 0.0 {
        return Ok(Root { x: hi, iterations: 0 });
    }
    if f_lo.signum() == f_hi.signum() || f_lo.is_nan() || f_hi.is_nan() {
        return Err(RootError::NoSignChange {
            lower,
            upper,
            f_lower: f_lo,
            f_upper: f_hi,
        });
    }

    for iteration in 1..=MAX_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);

        if f_mid == 0.0 || 0.5 * (hi - lo) <= tolerance || mid <= lo || mid >= hi {
            return Ok(Root {
                x: mid,
                iterations: iteration,
            });
        }

        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Err(RootError::MaxIterations(MAX_ITERATIONS))
}
