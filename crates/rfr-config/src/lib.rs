//! RFR Configuration Layer
//!
//! Serializable settings for the curve engine in `rfr-curves`, loaded from
//! TOML, together with the static reference data of the published curves.
//!
//! # Features
//!
//! - **Smith-Wilson Configuration**: UFR, CRA, convergence settings, alpha precision
//! - **Alternative Extrapolation**: Newton budget and tolerance, span, swap CRA
//! - **Validation**: every invalid field is reported, not just the first
//! - **Reference Data**: countries and currencies with a published curve
//! - **Reference Dates**: month-end resolution of requested dates
//!
//! # Example
//!
//! ```rust
//! use rfr_config::{RfrConfig, Validate};
//! use rfr_curves::{smith_wilson, LiquidRates};
//!
//! let config = RfrConfig::from_toml_str(
//!     r#"
//!     currency = "EUR"
//!
//!     [smith_wilson]
//!     ufr = 0.0345
//!     "#,
//! )
//! .unwrap();
//! assert!(config.is_valid());
//!
//! let liquid = LiquidRates::new(vec![(1, 0.02), (5, 0.025), (10, 0.028)]).unwrap();
//! let fit = smith_wilson(&liquid, &config.smith_wilson.params()).unwrap();
//! assert_eq!(fit.curve.zero_rates().len(), 121);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alternative;
pub mod config;
pub mod error;
pub mod reference_date;
pub mod regions;
pub mod smith_wilson;

pub use alternative::AlternativeConfig;
pub use config::RfrConfig;
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use reference_date::{compact_reference_date, resolve_reference_date};
pub use regions::{is_known_country, is_known_currency, COUNTRIES, CURRENCIES};
pub use smith_wilson::SmithWilsonConfig;
