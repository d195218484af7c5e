//! Smith-Wilson entry point.
//!
//! Ties the pipeline together: validate the settings, build the pricing
//! matrix, calibrate alpha, evaluate the curves.

use log::info;
use serde::{Deserialize, Serialize};

use crate::calibration::{AlphaCalibrator, CalibrationResult};
use crate::curve::LiquidRates;
use crate::error::{CurveError, CurveResult};
use crate::evaluator::{evaluate_curve, CurveOutput, OutputType, SmithWilsonCurve, DEFAULT_HORIZON};
use crate::instruments::{check_instrument, pricing_matrix, CalibrationMethod, Instrument};

/// Basis points per unit.
const BASIS_POINTS: f64 = 10_000.0;

/// Settings of a Smith-Wilson run.
///
/// `cra_bp` and `tau_bp` are in basis points; `ufr` is an annually
/// compounded rate in per-unit terms. Defaults reproduce the regulatory
/// reference settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmithWilsonParams {
    /// Instrument type of the liquid rates.
    pub instrument: Instrument,
    /// Coupon payments per year.
    pub nrofcoup: u32,
    /// Credit risk adjustment in basis points, subtracted from every rate.
    pub cra_bp: f64,
    /// Ultimate forward rate.
    pub ufr: f64,
    /// Lower bound of the alpha scan.
    pub min_alpha: f64,
    /// Convergence tolerance in basis points.
    pub tau_bp: f64,
    /// Convergence maturity in years.
    pub t2: u32,
    /// Decimal digits of the calibrated alpha.
    pub precision: u32,
    /// Alpha search method.
    pub method: CalibrationMethod,
    /// Last output maturity.
    pub horizon: usize,
}

impl Default for SmithWilsonParams {
    fn default() -> Self {
        Self {
            instrument: Instrument::Zero,
            nrofcoup: 1,
            cra_bp: 0.0,
            ufr: 0.0,
            min_alpha: 0.05,
            tau_bp: 1.0,
            t2: 60,
            precision: 6,
            method: CalibrationMethod::BruteForce,
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl SmithWilsonParams {
    /// Sets the ultimate forward rate.
    #[must_use]
    pub fn with_ufr(mut self, ufr: f64) -> Self {
        self.ufr = ufr;
        self
    }

    /// Sets the credit risk adjustment in basis points.
    #[must_use]
    pub fn with_cra_bp(mut self, cra_bp: f64) -> Self {
        self.cra_bp = cra_bp;
        self
    }

    /// Sets the convergence tolerance in basis points.
    #[must_use]
    pub fn with_tau_bp(mut self, tau_bp: f64) -> Self {
        self.tau_bp = tau_bp;
        self
    }

    /// Sets the convergence maturity.
    #[must_use]
    pub fn with_t2(mut self, t2: u32) -> Self {
        self.t2 = t2;
        self
    }

    /// Sets the lower bound of the alpha scan.
    #[must_use]
    pub fn with_min_alpha(mut self, min_alpha: f64) -> Self {
        self.min_alpha = min_alpha;
        self
    }

    /// Sets the alpha precision.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the output horizon.
    #[must_use]
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the instrument type.
    #[must_use]
    pub fn with_instrument(mut self, instrument: Instrument) -> Self {
        self.instrument = instrument;
        self
    }

    /// Sets the coupon frequency.
    #[must_use]
    pub fn with_nrofcoup(mut self, nrofcoup: u32) -> Self {
        self.nrofcoup = nrofcoup;
        self
    }

    /// Sets the calibration method.
    #[must_use]
    pub fn with_method(mut self, method: CalibrationMethod) -> Self {
        self.method = method;
        self
    }

    /// Checks the settings that must hold before any matrix work.
    pub fn check(&self) -> CurveResult<()> {
        check_instrument(self.instrument, self.nrofcoup)?;
        if self.method != CalibrationMethod::BruteForce {
            return Err(CurveError::not_implemented(format!(
                "calibration method '{}', only brute_force is available",
                self.method
            )));
        }
        if !self.ufr.is_finite() || self.ufr <= -1.0 {
            return Err(CurveError::invalid_input(format!(
                "ufr must be greater than -1, got {}",
                self.ufr
            )));
        }
        if !self.cra_bp.is_finite() || !self.tau_bp.is_finite() {
            return Err(CurveError::invalid_input("cra and tau must be finite"));
        }
        Ok(())
    }
}

/// Result of a Smith-Wilson run: the calibration and the evaluated curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmithWilsonFit {
    /// Alpha, gamma and convergence diagnostics.
    pub calibration: CalibrationResult,
    /// All curve variants over `0..=horizon`.
    pub curve: SmithWilsonCurve,
}

impl SmithWilsonFit {
    /// Selects one output.
    pub fn output(&self, kind: OutputType) -> CurveOutput {
        self.curve.output(kind)
    }
}

/// Calibrates and evaluates a Smith-Wilson curve for the liquid rates.
///
/// # Example
///
/// ```rust
/// use rfr_curves::{smith_wilson, LiquidRates, OutputType, SmithWilsonParams};
///
/// let liquid = LiquidRates::new(vec![(1, 0.02), (5, 0.025), (10, 0.028), (20, 0.03)]).unwrap();
/// let params = SmithWilsonParams::default().with_ufr(0.036);
/// let fit = smith_wilson(&liquid, &params).unwrap();
///
/// let alpha = fit.output(OutputType::Alpha).as_alpha().unwrap();
/// assert!(alpha >= params.min_alpha);
/// ```
pub fn smith_wilson(liquid: &LiquidRates, params: &SmithWilsonParams) -> CurveResult<SmithWilsonFit> {
    params.check()?;

    let log_ufr = (1.0 + params.ufr).ln();
    let tau = params.tau_bp / BASIS_POINTS;
    let cra = params.cra_bp / BASIS_POINTS;

    let q = pricing_matrix(params.instrument, liquid, params.nrofcoup, cra, log_ufr)?;
    let calibration =
        AlphaCalibrator::new(&q, params.nrofcoup, params.t2, tau)?.calibrate(params.min_alpha, params.precision)?;

    info!(
        "Smith-Wilson: {} liquid rates up to {}Y, alpha = {} (converged: {})",
        liquid.len(),
        liquid.last_maturity(),
        calibration.alpha,
        calibration.converged
    );

    let curve = evaluate_curve(
        calibration.alpha,
        &calibration.gamma_vector(),
        params.ufr,
        params.nrofcoup,
        params.horizon,
    )?;

    Ok(SmithWilsonFit { calibration, curve })
}

/// Runs [`smith_wilson`] and returns a single output.
pub fn smith_wilson_output(
    liquid: &LiquidRates,
    params: &SmithWilsonParams,
    kind: OutputType,
) -> CurveResult<CurveOutput> {
    smith_wilson(liquid, params).map(|fit| fit.output(kind))
}

/// Runs [`smith_wilson`] for independent inputs.
///
/// Results keep the input order. With the `parallel` feature the inputs
/// are processed on the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn smith_wilson_batch(inputs: &[(LiquidRates, SmithWilsonParams)]) -> Vec<CurveResult<SmithWilsonFit>> {
    use rayon::prelude::*;

    inputs
        .par_iter()
        .map(|(liquid, params)| smith_wilson(liquid, params))
        .collect()
}

/// Runs [`smith_wilson`] for independent inputs.
///
/// Results keep the input order. With the `parallel` feature the inputs
/// are processed on the rayon thread pool.
#[cfg(not(feature = "parallel"))]
pub fn smith_wilson_batch(inputs: &[(LiquidRates, SmithWilsonParams)]) -> Vec<CurveResult<SmithWilsonFit>> {
    inputs
        .iter()
        .map(|(liquid, params)| smith_wilson(liquid, params))
        .collect()
}
