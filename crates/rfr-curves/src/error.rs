//! Error types for curve operations.

use rfr_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The requested instrument/frequency combination is not supported.
    #[error("Configuration error: {reason}")]
    Configuration {
        /// Description of the unsupported setting.
        reason: String,
    },

    /// The requested feature exists in the configuration model but has no implementation.
    #[error("Not implemented: {feature}")]
    NotImplemented {
        /// Name of the missing feature.
        feature: String,
    },

    /// `Q H Q'` could not be inverted for the given trial alpha.
    #[error("Singular calibration matrix at alpha = {alpha}")]
    SingularCalibrationMatrix {
        /// Trial alpha at which the solve failed.
        alpha: f64,
    },

    /// Invalid input data.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what is wrong.
        reason: String,
    },

    /// A maturity required by the operation has no rate.
    #[error("Missing rate for maturity {maturity}")]
    MissingRate {
        /// The maturity without a rate.
        maturity: u32,
    },

    /// The evaluated curve left the domain of the rate conversions.
    #[error("Non-positive discount factor {value:.6e} at maturity {maturity}")]
    NonPositiveDiscountFactor {
        /// Maturity of the offending discount factor.
        maturity: usize,
        /// The discount factor value.
        value: f64,
    },

    /// Underlying numerical failure.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Creates a not-implemented error.
    #[must_use]
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        Self::NotImplemented {
            feature: feature.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
