//! Reference date command implementation.

use anyhow::Result;
use chrono::Local;
use clap::Args;

use rfr_config::{compact_reference_date, resolve_reference_date};

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::output::{print_key_values, KeyValue};

/// Arguments for the reference-date command.
#[derive(Args, Debug)]
pub struct ReferenceDateArgs {
    /// Requested date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Execute the reference-date command.
pub fn execute(args: ReferenceDateArgs, format: OutputFormat) -> Result<()> {
    let requested = args.date.as_deref().map(parse_date).transpose()?;
    let today = Local::now().date_naive();
    let reference = resolve_reference_date(requested, today);

    let pairs = vec![
        KeyValue::new(
            "input_date",
            requested.map_or_else(|| today.to_string(), |d| d.to_string()),
        ),
        KeyValue::new("reference_date", reference.to_string()),
        KeyValue::new("compact", compact_reference_date(reference)),
    ];

    print_key_values("Reference Date", &pairs, format)
}
