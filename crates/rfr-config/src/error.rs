//! Configuration error types.

use rfr_curves::CurveError;
use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {}", join_errors(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Malformed configuration text.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parameters rejected by the curve engine.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
    /// Validation rule that was violated.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref rule) = self.rule {
            write!(f, "{}: {} (rule: {})", self.field, self.message, rule)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Validates the configuration.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}
