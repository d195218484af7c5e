//! Calibration of the Smith-Wilson convergence speed.
//!
//! For a trial `alpha` the weight vector follows from the pricing matrix:
//!
//! ```text
//! b     = (Q H Q')^-1 (1 - Q 1)
//! gamma = Q' b
//! kappa = (1 + alpha * sum_i gamma_i u_i) / sum_i gamma_i sinh(alpha u_i)
//! g(alpha) = alpha / |1 - kappa * exp(T2 * alpha)| - tau
//! ```
//!
//! with `u_i = (i + 1) / nrofcoup`. `g(alpha) + tau` is the gap between the
//! forward intensity at the convergence maturity `T2` and the UFR; the
//! calibrated alpha is the first point of the decimal scan at which the gap
//! is within `tau`.

use log::{debug, warn};
use nalgebra::{DMatrix, DVector};
use rfr_math::kernel::h_matrix;
use rfr_math::linear_algebra::{row_sums, solve_linear_system};
use rfr_math::rounding::round_half_even;
use rfr_math::solvers::{decimal_scan, ScanConfig};
use rfr_math::MathError;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Result of an alpha calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationResult {
    /// Convergence speed, rounded to the scan precision.
    pub alpha: f64,
    /// Weight vector `Q' b` of the last scan evaluation, length `m`.
    pub gamma: Vec<f64>,
    /// Whether the scan found an alpha meeting the convergence criterion.
    pub converged: bool,
    /// Number of `g(alpha)` evaluations performed.
    pub evaluations: u32,
}

impl CalibrationResult {
    /// The weight vector as an `nalgebra` column vector.
    pub fn gamma_vector(&self) -> DVector<f64> {
        DVector::from_column_slice(&self.gamma)
    }
}

/// Calibrates alpha against a fixed pricing matrix.
///
/// The calibrator borrows `Q` and holds only scalar settings, so one
/// instance can evaluate any number of trial alphas without shared state.
#[derive(Debug, Clone, Copy)]
pub struct AlphaCalibrator<'a> {
    q: &'a DMatrix<f64>,
    nrofcoup: u32,
    t2: f64,
    tau: f64,
}

impl<'a> AlphaCalibrator<'a> {
    /// Creates a calibrator.
    ///
    /// `t2` is the convergence maturity in years and `tau` the convergence
    /// tolerance in per-unit terms (1 bp = 0.0001).
    pub fn new(q: &'a DMatrix<f64>, nrofcoup: u32, t2: u32, tau: f64) -> CurveResult<Self> {
        if q.nrows() == 0 || q.ncols() == 0 {
            return Err(CurveError::invalid_input("pricing matrix is empty"));
        }
        if q.nrows() > q.ncols() {
            return Err(CurveError::invalid_input(format!(
                "pricing matrix has more instruments ({}) than cash-flow dates ({})",
                q.nrows(),
                q.ncols()
            )));
        }
        if nrofcoup == 0 {
            return Err(CurveError::invalid_input("nrofcoup must be positive"));
        }

        Ok(Self {
            q,
            nrofcoup,
            t2: f64::from(t2),
            tau,
        })
    }

    /// Evaluates `g(alpha) - tau` and the weight vector at a trial alpha.
    ///
    /// Rebuilds the kernel matrix for `alpha` on every call.
    pub fn evaluate(&self, alpha: f64) -> CurveResult<(f64, DVector<f64>)> {
        let q = self.q;
        let freq = f64::from(self.nrofcoup);

        let h = h_matrix(alpha, self.nrofcoup, q.ncols());
        let rhs = row_sums(q).map(|sum| 1.0 - sum);
        let qhq = q * &h * q.transpose();

        let b = solve_linear_system(&qhq, &rhs).map_err(|err| match err {
            MathError::SingularMatrix => CurveError::SingularCalibrationMatrix { alpha },
            other => other.into(),
        })?;
        let gamma = q.transpose() * b;

        let weighted_maturity: f64 = gamma
            .iter()
            .enumerate()
            .map(|(i, g)| g * (i + 1) as f64 / freq)
            .sum();
        let weighted_sinh: f64 = gamma
            .iter()
            .enumerate()
            .map(|(i, g)| g * (alpha * (i + 1) as f64 / freq).sinh())
            .sum();

        let kappa = (1.0 + alpha * weighted_maturity) / weighted_sinh;
        let residual = alpha / (1.0 - kappa * (self.t2 * alpha).exp()).abs() - self.tau;

        Ok((residual, gamma))
    }

    /// Runs the decimal scan from `min_alpha` with `precision` decimal digits.
    ///
    /// Non-convergence is reported through [`CalibrationResult::converged`]
    /// and a warning, never as an error.
    pub fn calibrate(&self, min_alpha: f64, precision: u32) -> CurveResult<CalibrationResult> {
        if !(min_alpha.is_finite() && min_alpha > 0.0) {
            return Err(CurveError::invalid_input(format!(
                "minimum alpha must be positive, got {min_alpha}"
            )));
        }
        if precision == 0 {
            return Err(CurveError::invalid_input("precision must be at least 1"));
        }

        let outcome = decimal_scan(|alpha| self.evaluate(alpha), &ScanConfig::new(min_alpha, precision))?;

        if !outcome.converged {
            warn!(
                "alpha calibration did not meet the convergence criterion; using alpha = {} (g - tau = {:.3e})",
                outcome.point, outcome.value
            );
        }

        let alpha = round_half_even(outcome.point, precision)?;
        debug!(
            "calibrated alpha = {alpha} after {} evaluations",
            outcome.evaluations
        );

        Ok(CalibrationResult {
            alpha,
            gamma: outcome.payload.iter().copied().collect(),
            converged: outcome.converged,
            evaluations: outcome.evaluations,
        })
    }
}

/// Calibrates alpha and gamma for a pricing matrix.
///
/// Convenience wrapper around [`AlphaCalibrator`]; `tau` is per unit.
pub fn calibrate_alpha(
    q: &DMatrix<f64>,
    nrofcoup: u32,
    t2: u32,
    tau: f64,
    min_alpha: f64,
    precision: u32,
) -> CurveResult<CalibrationResult> {
    AlphaCalibrator::new(q, nrofcoup, t2, tau)?.calibrate(min_alpha, precision)
}
