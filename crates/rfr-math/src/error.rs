//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Matrix is singular (not invertible).
    #[error("Singular matrix: cannot invert")]
    SingularMatrix,

    /// Matrix dimensions are incompatible.
    #[error("Incompatible matrix dimensions: ({rows1}x{cols1}) and ({rows2}x{cols2})")]
    DimensionMismatch {
        /// Rows in first matrix.
        rows1: usize,
        /// Columns in first matrix.
        cols1: usize,
        /// Rows in second matrix.
        rows2: usize,
        /// Columns in second matrix.
        cols2: usize,
    },

    /// Division by zero or near-zero value.
    #[error("Division by zero or near-zero value: {value:.2e}")]
    DivisionByZero {
        /// The near-zero value.
        value: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// A computation produced NaN or infinity.
    #[error("Non-finite result in {operation}")]
    NonFinite {
        /// The operation that produced the value.
        operation: String,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a non-finite result error.
    #[must_use]
    pub fn non_finite(operation: impl Into<String>) -> Self {
        Self::NonFinite {
            operation: operation.into(),
        }
    }
}
