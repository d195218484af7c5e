//! Par to forward command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rfr_config::{RfrConfig, Validate};
use rfr_curves::alternative::par_to_forward_detailed;
use rfr_curves::RateTable;

use crate::cli::OutputFormat;
use crate::commands::parse_curve_data;
use crate::output::{curve_points, print_header, print_output, print_warning};

/// Arguments for the par-to-forward command.
#[derive(Args, Debug)]
pub struct ParForwardArgs {
    /// Par maturities in years (comma-separated)
    #[arg(long)]
    pub maturities: String,

    /// Par rates per unit (comma-separated)
    #[arg(long, allow_hyphen_values = true)]
    pub rates: String,

    /// Last maturity of the forward curve
    #[arg(long)]
    pub span: Option<u32>,

    /// Newton iteration budget per bucket
    #[arg(long)]
    pub max_runs: Option<u32>,

    /// Newton tolerance
    #[arg(long)]
    pub max_error: Option<f64>,

    /// Print the Newton diagnostics of each bucket instead of the curve
    #[arg(long)]
    pub buckets: bool,
}

#[derive(Serialize, Tabled)]
struct BucketRow {
    #[tabled(rename = "Maturity")]
    maturity: u32,
    #[tabled(rename = "Forward")]
    forward: f64,
    #[tabled(rename = "Iterations")]
    iterations: u32,
    #[tabled(rename = "Residual")]
    residual: f64,
    #[tabled(rename = "Converged")]
    converged: bool,
}

/// Execute the par-to-forward command.
pub fn execute(args: ParForwardArgs, config: &RfrConfig, format: OutputFormat) -> Result<()> {
    let par: RateTable = parse_curve_data(&args.maturities, &args.rates)?
        .into_iter()
        .collect();

    let mut settings = config.alternative;
    if let Some(span) = args.span {
        settings.span = span;
    }
    if let Some(max_runs) = args.max_runs {
        settings.max_runs = max_runs;
    }
    if let Some(max_error) = args.max_error {
        settings.max_error = max_error;
    }
    settings.validate_or_error()?;

    let result = par_to_forward_detailed(&par, settings.span, settings.max_runs, settings.max_error)?;
    if !result.converged() {
        print_warning("some buckets did not reach the tolerance; see --buckets");
    }

    if args.buckets {
        let rows: Vec<BucketRow> = result
            .buckets
            .iter()
            .map(|b| BucketRow {
                maturity: b.maturity,
                forward: b.forward,
                iterations: b.iterations,
                residual: b.residual,
                converged: b.converged,
            })
            .collect();
        if format == OutputFormat::Table {
            print_header("Par to Forward Buckets");
        }
        return print_output(&rows, format);
    }

    if format == OutputFormat::Table {
        print_header("Forward Rates");
    }
    print_output(&curve_points(&result.forwards), format)
}
