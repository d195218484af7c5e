//! RFR CLI - Command-line interface for risk-free rate curves.
//!
//! # Usage
//!
//! ```bash
//! # Smith-Wilson zero curve from liquid zero rates
//! rfr smith-wilson --maturities 1,2,3,5,10,20 --rates 0.01,0.012,0.013,0.015,0.018,0.02 --ufr 0.0345
//!
//! # Calibrated alpha only
//! rfr smith-wilson --maturities 1,5,10 --rates 0.01,0.015,0.018 --output alpha
//!
//! # Forwards from a par curve
//! rfr par-to-forward --maturities 1,2,5,10 --rates 0.01,0.012,0.015,0.018
//!
//! # Reference date of the latest published curve
//! rfr reference-date
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);

    let format = cli.format;
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::SmithWilson(args) => commands::smith_wilson::execute(args, &config, format)?,
        Commands::ParToForward(args) => commands::par_forward::execute(args, &config, format)?,
        Commands::ParCurve(args) => commands::par_curve::execute(args, &config, format)?,
        Commands::TermStructure(args) => commands::term_structure::execute(args, format)?,
        Commands::ReferenceDate(args) => commands::reference_date::execute(args, format)?,
    }

    Ok(())
}

/// Installs the log subscriber on stderr. `RUST_LOG` takes precedence over
/// the `--quiet` and `--verbose` flags.
fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
