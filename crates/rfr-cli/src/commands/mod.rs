//! CLI command implementations.

pub mod par_curve;
pub mod par_forward;
pub mod reference_date;
pub mod smith_wilson;
pub mod term_structure;

pub use par_curve::ParCurveArgs;
pub use par_forward::ParForwardArgs;
pub use reference_date::ReferenceDateArgs;
pub use smith_wilson::SmithWilsonArgs;
pub use term_structure::TermStructureArgs;

use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use rfr_config::RfrConfig;
use rfr_curves::RateTable;

use crate::error::{CliError, CliResult};

/// Loads the configuration file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<RfrConfig> {
    match path {
        Some(path) => {
            debug!("reading configuration from {}", path.display());
            Ok(RfrConfig::from_file(path)?)
        }
        None => Ok(RfrConfig::default()),
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a comma-separated list.
pub fn parse_list<T: FromStr>(s: &str, what: &'static str) -> CliResult<Vec<T>> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<T>().map_err(|_| CliError::InvalidNumber {
                what,
                value: item.to_string(),
            })
        })
        .collect()
}

/// Parses matching maturity and rate lists.
pub fn parse_curve_data(maturities: &str, rates: &str) -> CliResult<Vec<(u32, f64)>> {
    let maturities: Vec<u32> = parse_list(maturities, "maturity")?;
    let rates: Vec<f64> = parse_list(rates, "rate")?;

    if maturities.len() != rates.len() {
        return Err(CliError::LengthMismatch {
            maturities: maturities.len(),
            rates: rates.len(),
        });
    }

    Ok(maturities.into_iter().zip(rates).collect())
}

/// Parses swap points of the form `25:0.012,30:0.013`.
pub fn parse_swaps(s: &str) -> CliResult<RateTable> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            let (maturity, rate) = item
                .split_once(':')
                .ok_or_else(|| CliError::InvalidSwap(item.to_string()))?;
            let maturity = maturity
                .trim()
                .parse::<u32>()
                .map_err(|_| CliError::InvalidSwap(item.to_string()))?;
            let rate = rate
                .trim()
                .parse::<f64>()
                .map_err(|_| CliError::InvalidSwap(item.to_string()))?;
            Ok((maturity, rate))
        })
        .collect()
}
