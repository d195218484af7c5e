//! Term structure command implementation.

use anyhow::Result;
use clap::Args;

use rfr_curves::alternative::forward_to_term_structure;
use rfr_curves::MaturityCurve;

use crate::cli::OutputFormat;
use crate::commands::parse_list;
use crate::output::{curve_points, print_header, print_output};

/// Arguments for the term-structure command.
#[derive(Args, Debug)]
pub struct TermStructureArgs {
    /// One-year forward rates per unit from maturity 1 (comma-separated)
    #[arg(long, allow_hyphen_values = true)]
    pub forwards: String,
}

/// Execute the term-structure command.
pub fn execute(args: TermStructureArgs, format: OutputFormat) -> Result<()> {
    let forwards = MaturityCurve::new(1, parse_list(&args.forwards, "forward rate")?);
    let spots = forward_to_term_structure(&forwards)?;

    if format == OutputFormat::Table {
        print_header("Spot Rates");
    }
    print_output(&curve_points(&spots), format)
}
