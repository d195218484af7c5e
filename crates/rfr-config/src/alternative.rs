//! Alternative extrapolation configuration.

use serde::{Deserialize, Serialize};

use rfr_curves::alternative::{DEFAULT_CRA, DEFAULT_MAX_ERROR, DEFAULT_MAX_RUNS, DEFAULT_SPAN};

use crate::error::{Validate, ValidationError};

/// Settings of the par to forward conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeConfig {
    /// Last maturity of the forward curve.
    pub span: u32,
    /// Newton iteration budget per bucket.
    pub max_runs: u32,
    /// Newton tolerance on the discounted par value.
    pub max_error: f64,
    /// Credit risk adjustment applied to swap points, per unit.
    pub cra: f64,
}

impl Default for AlternativeConfig {
    fn default() -> Self {
        Self {
            span: DEFAULT_SPAN,
            max_runs: DEFAULT_MAX_RUNS,
            max_error: DEFAULT_MAX_ERROR,
            cra: DEFAULT_CRA,
        }
    }
}

impl Validate for AlternativeConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.span == 0 {
            errors.push(ValidationError::with_rule(
                "span",
                "Span must be at least one year",
                "positive_span",
            ));
        }

        if !self.max_error.is_finite() || self.max_error <= 0.0 {
            errors.push(ValidationError::with_rule(
                "max_error",
                "Tolerance must be positive",
                "positive_tolerance",
            ));
        }

        if !self.cra.is_finite() {
            errors.push(ValidationError::new("cra", "CRA must be finite"));
        }

        errors
    }
}
