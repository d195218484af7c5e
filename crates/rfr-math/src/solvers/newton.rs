//! Budgeted Newton-Raphson iteration.

use crate::error::{MathError, MathResult};
use crate::solvers::SolverConfig;

/// Result of a budgeted Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonOutcome {
    /// Final iterate.
    pub root: f64,
    /// Number of Newton steps taken.
    pub iterations: u32,
    /// Function value at `root`.
    pub residual: f64,
    /// Whether `|residual| < tolerance` was reached within the budget.
    pub converged: bool,
}

/// Newton-Raphson on a function returning `(value, derivative)`.
///
/// Iterates `x <- x - f(x) / f'(x)` until `|f(x)| < tolerance` or
/// `max_iterations` steps have been taken. Running out of budget is not an
/// error: the last iterate is returned with `converged = false`.
///
/// A zero or non-finite derivative, or a non-finite iterate, aborts the
/// solve with an error since no further step is defined.
///
/// # Example
///
/// ```rust
/// use rfr_math::solvers::{newton_raphson, SolverConfig};
///
/// let outcome = newton_raphson(|x| (x * x - 2.0, 2.0 * x), 1.5, &SolverConfig::default()).unwrap();
/// assert!(outcome.converged);
/// assert!((outcome.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F>(f: F, initial_guess: f64, config: &SolverConfig) -> MathResult<NewtonOutcome>
where
    F: Fn(f64) -> (f64, f64),
{
    let mut x = initial_guess;
    let (mut fx, mut dfx) = f(x);
    let mut iterations = 0;

    while fx.abs() >= config.tolerance && iterations < config.max_iterations {
        if dfx == 0.0 || !dfx.is_finite() {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        x -= fx / dfx;
        if !x.is_finite() {
            return Err(MathError::non_finite("Newton step"));
        }

        (fx, dfx) = f(x);
        iterations += 1;
    }

    Ok(NewtonOutcome {
        root: x,
        iterations,
        residual: fx,
        converged: fx.abs() < config.tolerance,
    })
}
