//! Par rates to bucketed forward rates.

use log::{debug, warn};
use rfr_math::solvers::{newton_raphson, SolverConfig};
use serde::{Deserialize, Serialize};

use crate::curve::{MaturityCurve, RateTable};
use crate::error::{CurveError, CurveResult};

/// Discounted value of a par instrument and its derivative in the forward rate.
///
/// The instrument matures `t_min_k` periods after the previous par maturity.
/// `sum_df` is the sum of discount factors up to the previous maturity and
/// `last_df` the discount factor at it. With a constant `forward_rate` over
/// the bucket the value is
///
/// ```text
/// V(f) = par * (sum_df + sum_{i=1..k} last_df / (1 + f)^i) + last_df / (1 + f)^k - 1
/// ```
///
/// Returns `(V(f), V'(f))`. The forward rate solving the bucket is the root
/// of `V`.
pub fn discounted_value_par_to_forwards(
    sum_df: f64,
    last_df: f64,
    par_rate: f64,
    forward_rate: f64,
    t_min_k: u32,
) -> (f64, f64) {
    let growth = 1.0 + forward_rate;
    let mut value = sum_df * par_rate;
    let mut derivative = 0.0;

    for i in 1..=t_min_k {
        let i = i as i32;
        value += par_rate * last_df / growth.powi(i);
        derivative -= f64::from(i) * par_rate * last_df / growth.powi(i + 1);
    }

    let k = t_min_k as i32;
    value += last_df / growth.powi(k) - 1.0;
    derivative -= f64::from(k) * last_df / growth.powi(k + 1);

    (value, derivative)
}

/// Newton solve diagnostics for one par bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketSolve {
    /// Par maturity closing the bucket.
    pub maturity: u32,
    /// Solved forward rate for the bucket.
    pub forward: f64,
    /// Newton steps taken.
    pub iterations: u32,
    /// Discounted par value at `forward`.
    pub residual: f64,
    /// Whether `|residual| < max_error` was reached.
    pub converged: bool,
}

/// Forward curve together with the per-bucket diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParForwardResult {
    /// Forward rates over maturities `1..=span`.
    pub forwards: MaturityCurve,
    /// One entry per par maturity, in order.
    pub buckets: Vec<BucketSolve>,
}

impl ParForwardResult {
    /// Whether every bucket converged.
    pub fn converged(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.converged)
    }
}

/// Converts a par curve into forward rates over maturities `1..=span`.
///
/// See [`par_to_forward_detailed`].
pub fn par_to_forward(
    par_curve: &RateTable,
    span: u32,
    max_runs: u32,
    max_error: f64,
) -> CurveResult<MaturityCurve> {
    par_to_forward_detailed(par_curve, span, max_runs, max_error).map(|result| result.forwards)
}

/// Converts a par curve into forward rates, keeping the Newton diagnostics.
///
/// For each par maturity, a single forward rate is solved for the bucket
/// starting after the previous par maturity, so that the par instrument
/// prices at par given the forwards already fixed. Each solve starts at 0
/// and takes at most `max_runs` Newton steps; a bucket that does not reach
/// `max_error` keeps its last iterate and is reported with a warning.
///
/// Maturities after the last par maturity repeat the last solved forward.
///
/// # Example
///
/// ```rust
/// use rfr_curves::alternative::par_to_forward;
/// use rfr_curves::RateTable;
///
/// let par: RateTable = [(1, 0.02), (2, 0.025), (5, 0.03)].into_iter().collect();
/// let forwards = par_to_forward(&par, 10, 20, 1e-10).unwrap();
///
/// assert!((forwards.get(1).unwrap() - 0.02).abs() < 1e-9);
/// assert_eq!(forwards.get(10), forwards.get(5));
/// ```
pub fn par_to_forward_detailed(
    par_curve: &RateTable,
    span: u32,
    max_runs: u32,
    max_error: f64,
) -> CurveResult<ParForwardResult> {
    let last_maturity = match par_curve.keys().next_back() {
        Some(&maturity) => maturity,
        None => return Err(CurveError::invalid_input("par curve is empty")),
    };
    if par_curve.contains_key(&0) {
        return Err(CurveError::invalid_input("par maturities must be positive"));
    }
    if last_maturity > span {
        return Err(CurveError::invalid_input(format!(
            "last par maturity {last_maturity} exceeds the span {span}"
        )));
    }
    if !(max_error.is_finite() && max_error > 0.0) {
        return Err(CurveError::invalid_input(format!(
            "max_error must be positive, got {max_error}"
        )));
    }

    let config = SolverConfig::new(max_error, max_runs);
    let mut forwards = vec![0.0; span as usize];
    let mut buckets = Vec::with_capacity(par_curve.len());

    let mut sum_df = 0.0;
    let mut df = 1.0;
    let mut previous_maturity = 0;

    for (&maturity, &par_rate) in par_curve {
        let t_min_k = maturity - previous_maturity;
        let outcome = newton_raphson(
            |f| discounted_value_par_to_forwards(sum_df, df, par_rate, f, t_min_k),
            0.0,
            &config,
        )?;

        if !outcome.converged {
            warn!(
                "par to forward: bucket ending at {maturity}Y did not converge in {max_runs} runs (residual {:.3e})",
                outcome.residual
            );
        }

        for i in previous_maturity + 1..=maturity {
            forwards[i as usize - 1] = outcome.root;
            df /= 1.0 + outcome.root;
            sum_df += df;
        }

        buckets.push(BucketSolve {
            maturity,
            forward: outcome.root,
            iterations: outcome.iterations,
            residual: outcome.residual,
            converged: outcome.converged,
        });
        previous_maturity = maturity;
    }

    let tail = forwards[last_maturity as usize - 1];
    for forward in &mut forwards[last_maturity as usize..] {
        *forward = tail;
    }

    debug!(
        "par to forward: {} buckets, flat from {last_maturity}Y to {span}Y",
        buckets.len()
    );

    Ok(ParForwardResult {
        forwards: MaturityCurve::new(1, forwards),
        buckets,
    })
}
