//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// A list entry could not be parsed.
    #[error("Invalid {what}: '{value}'")]
    InvalidNumber {
        /// Kind of value being parsed.
        what: &'static str,
        /// Offending text.
        value: String,
    },

    /// Maturity and rate lists differ in length.
    #[error("Number of maturities ({maturities}) must match number of rates ({rates})")]
    LengthMismatch {
        /// Number of maturities.
        maturities: usize,
        /// Number of rates.
        rates: usize,
    },

    /// A swap point is not of the form `maturity:rate`.
    #[error("Invalid swap point: '{0}'. Use MATURITY:RATE, e.g. 25:0.012.")]
    InvalidSwap(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
