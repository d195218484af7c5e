//! Smith-Wilson configuration.

use serde::{Deserialize, Serialize};

use rfr_curves::instruments::{CalibrationMethod, Instrument};
use rfr_curves::SmithWilsonParams;

use crate::error::{ConfigResult, Validate, ValidationError};

/// Smith-Wilson settings as stored in configuration files.
///
/// `cra` and `tau` are in basis points, `ufr` per unit. Missing fields take
/// the regulatory reference defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmithWilsonConfig {
    /// Instrument type of the liquid rates.
    pub instrument: Instrument,
    /// Coupon payments per year.
    pub nrofcoup: u32,
    /// Credit risk adjustment in basis points.
    pub cra: f64,
    /// Ultimate forward rate.
    pub ufr: f64,
    /// Lower bound of the alpha scan.
    pub min_alpha: f64,
    /// Convergence tolerance in basis points.
    pub tau: f64,
    /// Convergence maturity in years.
    pub t2: u32,
    /// Decimal digits of the calibrated alpha.
    pub precision: u32,
    /// Alpha search method.
    pub method: CalibrationMethod,
    /// Last output maturity.
    pub horizon: usize,
}

impl Default for SmithWilsonConfig {
    fn default() -> Self {
        let params = SmithWilsonParams::default();
        Self {
            instrument: params.instrument,
            nrofcoup: params.nrofcoup,
            cra: params.cra_bp,
            ufr: params.ufr,
            min_alpha: params.min_alpha,
            tau: params.tau_bp,
            t2: params.t2,
            precision: params.precision,
            method: params.method,
            horizon: params.horizon,
        }
    }
}

impl SmithWilsonConfig {
    /// Builds the calculation parameters.
    ///
    /// Each call returns a fresh value; the configuration itself is never
    /// consulted by the engine afterwards.
    pub fn params(&self) -> SmithWilsonParams {
        SmithWilsonParams {
            instrument: self.instrument,
            nrofcoup: self.nrofcoup,
            cra_bp: self.cra,
            ufr: self.ufr,
            min_alpha: self.min_alpha,
            tau_bp: self.tau,
            t2: self.t2,
            precision: self.precision,
            method: self.method,
            horizon: self.horizon,
        }
    }

    /// Validates the configuration and builds parameters the engine accepts.
    ///
    /// Field validation runs first; settings the engine does not support
    /// (swap or bond instruments, search methods other than the decimal
    /// scan) are then reported as [`ConfigError::Curve`](crate::ConfigError::Curve).
    pub fn checked_params(&self) -> ConfigResult<SmithWilsonParams> {
        self.validate_or_error()?;
        let params = self.params();
        params.check()?;
        Ok(params)
    }
}

impl Validate for SmithWilsonConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.nrofcoup == 0 {
            errors.push(ValidationError::with_rule(
                "nrofcoup",
                "Coupon frequency must be positive",
                "positive_frequency",
            ));
        }

        if !self.ufr.is_finite() || self.ufr <= -1.0 {
            errors.push(ValidationError::with_rule(
                "ufr",
                "UFR must be greater than -100%",
                "valid_ufr",
            ));
        }

        if !self.cra.is_finite() {
            errors.push(ValidationError::new("cra", "CRA must be finite"));
        }

        if !self.min_alpha.is_finite() || self.min_alpha <= 0.0 {
            errors.push(ValidationError::with_rule(
                "min_alpha",
                "Minimum alpha must be positive",
                "positive_alpha",
            ));
        }

        if !self.tau.is_finite() || self.tau <= 0.0 {
            errors.push(ValidationError::with_rule(
                "tau",
                "Convergence tolerance must be positive",
                "positive_tolerance",
            ));
        }

        if self.t2 == 0 {
            errors.push(ValidationError::with_rule(
                "t2",
                "Convergence maturity must be positive",
                "positive_maturity",
            ));
        }

        if self.precision == 0 || self.precision > 15 {
            errors.push(ValidationError::with_rule(
                "precision",
                "Precision must be between 1 and 15 digits",
                "valid_precision",
            ));
        }

        if self.horizon == 0 {
            errors.push(ValidationError::with_rule(
                "horizon",
                "Horizon must be at least one year",
                "positive_horizon",
            ));
        }

        errors
    }
}
