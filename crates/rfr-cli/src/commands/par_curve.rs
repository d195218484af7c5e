//! Par curve command implementation.

use anyhow::{bail, Result};
use clap::Args;

use rfr_config::RfrConfig;
use rfr_curves::alternative::{build_par_curve, SHORT_END_YEARS};
use rfr_curves::RateTable;

use crate::cli::OutputFormat;
use crate::commands::{parse_list, parse_swaps};
use crate::output::{print_header, print_output, CurvePoint};

/// Arguments for the par-curve command.
#[derive(Args, Debug)]
pub struct ParCurveArgs {
    /// Spot rates per unit for maturities 1 to 20 (comma-separated)
    #[arg(long, allow_hyphen_values = true)]
    pub rates: String,

    /// Swap points as MATURITY:RATE (comma-separated, e.g. "25:0.012,30:0.013")
    #[arg(long, allow_hyphen_values = true)]
    pub swaps: Option<String>,

    /// Credit risk adjustment subtracted from swap points, per unit
    #[arg(long, allow_hyphen_values = true)]
    pub cra: Option<f64>,
}

/// Execute the par-curve command.
pub fn execute(args: ParCurveArgs, config: &RfrConfig, format: OutputFormat) -> Result<()> {
    let rates: Vec<f64> = parse_list(&args.rates, "rate")?;
    if rates.len() > SHORT_END_YEARS as usize {
        bail!(
            "expected at most {SHORT_END_YEARS} spot rates, got {}; pass longer maturities as --swaps",
            rates.len()
        );
    }
    let spot: RateTable = (1..=SHORT_END_YEARS).zip(rates).collect();
    let swaps = match args.swaps {
        Some(ref s) => parse_swaps(s)?,
        None => RateTable::new(),
    };
    let cra = args.cra.unwrap_or(config.alternative.cra);

    let par = build_par_curve(&spot, &swaps, cra)?;
    let points: Vec<CurvePoint> = par
        .into_iter()
        .map(|(maturity, value)| CurvePoint { maturity, value })
        .collect();

    if format == OutputFormat::Table {
        print_header("Par Curve");
    }
    print_output(&points, format)
}
