//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    ParCurveArgs, ParForwardArgs, ReferenceDateArgs, SmithWilsonArgs, TermStructureArgs,
};

/// RFR - Solvency II risk-free rate curves
#[derive(Parser)]
#[command(name = "rfr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML configuration file; command-line options override it
    #[arg(short, long, global = true, env = "RFR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calibrate and evaluate a Smith-Wilson curve
    SmithWilson(SmithWilsonArgs),

    /// Convert a par curve into bucketed forward rates
    ParToForward(ParForwardArgs),

    /// Build a par curve from a 20-year spot curve and swap points
    ParCurve(ParCurveArgs),

    /// Compound forward rates into a spot curve
    TermStructure(TermStructureArgs),

    /// Resolve the reference date of a published curve
    ReferenceDate(ReferenceDateArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
