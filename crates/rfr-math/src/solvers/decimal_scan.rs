//! Deterministic decimal scan.
//!
//! The scan looks for the smallest trial point at which an objective turns
//! non-positive, one decimal digit at a time:
//!
//! 1. Evaluate at `start`. A non-positive value ends the search there.
//! 2. Outer scan: for `i = 0, 1, ..., max_trials - 1` move to
//!    `x + step + i / 10` and evaluate, stopping at the first non-positive
//!    value. The increments grow with `i`, so the outer scan covers a wide
//!    range with a bounded number of evaluations.
//! 3. Refinement, `precision - 1` rounds: step back by the current step, walk
//!    forward in ten sub-steps of `step / 10` until the objective is
//!    non-positive, then divide the step by ten.
//!
//! The trial sequence is fixed: downstream figures are defined by exactly
//! these evaluations, so the arithmetic is kept in this order.

use log::{debug, warn};

/// Parameters of a decimal scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// First trial point.
    pub start: f64,
    /// Step size of the outer scan (first decimal digit).
    pub initial_step: f64,
    /// Number of outer trial points.
    pub max_trials: u32,
    /// Number of decimal digits resolved; `precision - 1` refinement rounds run.
    pub precision: u32,
}

impl ScanConfig {
    /// Scan starting at `start` with the standard step of 0.1 and 200 trials.
    #[must_use]
    pub fn new(start: f64, precision: u32) -> Self {
        Self {
            start,
            initial_step: 0.1,
            max_trials: 200,
            precision,
        }
    }
}

/// Result of a decimal scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome<T> {
    /// Last evaluated trial point.
    pub point: f64,
    /// Objective value at `point`.
    pub value: f64,
    /// Payload returned alongside the objective value at `point`.
    pub payload: T,
    /// Whether a non-positive objective value was bracketed.
    pub converged: bool,
    /// Number of objective evaluations.
    pub evaluations: u32,
}

/// Runs the decimal scan on `objective`.
///
/// The objective returns its value together with an arbitrary payload (for
/// the Smith-Wilson calibration, the weight vector belonging to the trial
/// point). The payload of the last evaluation is returned, so it always
/// matches `point`.
///
/// If the outer scan never reaches a non-positive value, refinement is
/// skipped and the last outer trial is returned with `converged = false`.
/// Errors from the objective are propagated immediately.
///
/// # Example
///
/// ```rust
/// use rfr_math::solvers::{decimal_scan, ScanConfig};
///
/// // First point at or beyond sqrt(2), resolved to four decimals.
/// let outcome = decimal_scan(
///     |x| Ok::<_, ()>((2.0 - x * x, ())),
///     &ScanConfig::new(1.35, 4),
/// )
/// .unwrap();
/// assert!(outcome.converged);
/// assert!((outcome.point - 1.4143).abs() < 1e-9);
/// ```
pub fn decimal_scan<T, E, F>(mut objective: F, config: &ScanConfig) -> Result<ScanOutcome<T>, E>
where
    F: FnMut(f64) -> Result<(f64, T), E>,
{
    let mut x = config.start;
    let (mut value, mut payload) = objective(x)?;
    let mut evaluations = 1;

    if value <= 0.0 {
        debug!("decimal scan: start point {x} already satisfies the criterion");
        return Ok(ScanOutcome {
            point: x,
            value,
            payload,
            converged: true,
            evaluations,
        });
    }

    let mut step = config.initial_step;
    let mut bracketed = false;
    for i in 0..config.max_trials {
        x = x + step + f64::from(i) / 10.0;
        (value, payload) = objective(x)?;
        evaluations += 1;
        if value <= 0.0 {
            bracketed = true;
            break;
        }
    }

    if !bracketed {
        warn!(
            "decimal scan: no sign change after {} trials, returning last trial {x} (value {value:.3e})",
            config.max_trials
        );
        return Ok(ScanOutcome {
            point: x,
            value,
            payload,
            converged: false,
            evaluations,
        });
    }

    debug!("decimal scan: bracketed at {x}");

    for _ in 1..config.precision {
        x -= step;
        for _ in 1..=10 {
            x += step / 10.0;
            (value, payload) = objective(x)?;
            evaluations += 1;
            if value <= 0.0 {
                break;
            }
        }
        step /= 10.0;
    }

    debug!("decimal scan: settled at {x} after {evaluations} evaluations");

    Ok(ScanOutcome {
        point: x,
        value,
        payload,
        converged: true,
        evaluations,
    })
}
