//! Top-level configuration file.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::alternative::AlternativeConfig;
use crate::error::{ConfigResult, Validate, ValidationError};
use crate::regions::is_known_currency;
use crate::smith_wilson::SmithWilsonConfig;

/// Configuration of a risk-free rate run.
///
/// ```toml
/// currency = "EUR"
///
/// [smith_wilson]
/// ufr = 0.0345
/// cra = 10.0
///
/// [alternative]
/// max_runs = 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RfrConfig {
    /// Currency code of the curve, if any.
    pub currency: Option<String>,
    /// Smith-Wilson settings.
    pub smith_wilson: SmithWilsonConfig,
    /// Alternative extrapolation settings.
    pub alternative: AlternativeConfig,
}

impl RfrConfig {
    /// Parses a TOML document and validates it.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads and validates a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!("loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

impl Validate for RfrConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Some(ref currency) = self.currency {
            if !is_known_currency(currency) {
                errors.push(ValidationError::with_rule(
                    "currency",
                    format!("Unknown currency '{currency}'"),
                    "known_currency",
                ));
            }
        }

        errors.extend(self.smith_wilson.validate().into_iter().map(|e| ValidationError {
            field: format!("smith_wilson.{}", e.field),
            ..e
        }));
        errors.extend(self.alternative.validate().into_iter().map(|e| ValidationError {
            field: format!("alternative.{}", e.field),
            ..e
        }));

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use rfr_curves::instruments::Instrument;
    use std::io::Write;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = RfrConfig::from_toml_str("").unwrap();
        assert_eq!(config, RfrConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = RfrConfig::from_toml_str(
            r#"
            currency = "EUR"

            [smith_wilson]
            ufr = 0.0345
            cra = 10.0
            instrument = "zero"

            [alternative]
            max_runs = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.currency.as_deref(), Some("EUR"));
        assert_eq!(config.smith_wilson.ufr, 0.0345);
        assert_eq!(config.smith_wilson.cra, 10.0);
        assert_eq!(config.smith_wilson.instrument, Instrument::Zero);
        assert_eq!(config.smith_wilson.t2, 60);
        assert_eq!(config.alternative.max_runs, 30);
        assert_eq!(config.alternative.span, 120);
    }

    #[test]
    fn test_parse_error() {
        let err = RfrConfig::from_toml_str("[smith_wilson]\nufr = \"high\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_prefixes_fields() {
        let err = RfrConfig::from_toml_str(
            r#"
            currency = "XXX"

            [alternative]
            span = 0
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::MultipleValidationErrors(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["currency", "alternative.span"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_file_round_trip() {
        let config = RfrConfig {
            currency: Some("GBP".to_string()),
            smith_wilson: SmithWilsonConfig {
                ufr: 0.0345,
                ..SmithWilsonConfig::default()
            },
            alternative: AlternativeConfig::default(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rfr.toml");
        config.save(&path).unwrap();

        assert_eq!(RfrConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RfrConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_from_file_with_handle() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[smith_wilson]\nt2 = 40").unwrap();

        let config = RfrConfig::from_file(file.path()).unwrap();
        assert_eq!(config.smith_wilson.t2, 40);
    }
}
