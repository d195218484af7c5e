//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use rfr_curves::MaturityCurve;

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .to_string();

    println!("{table}");
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// One maturity of a curve.
#[derive(Debug, Clone, Copy, Serialize, Tabled)]
pub struct CurvePoint {
    #[tabled(rename = "Maturity")]
    pub maturity: u32,
    #[tabled(rename = "Value", display_with = "display_value")]
    pub value: f64,
}

fn display_value(value: &f64) -> String {
    format!("{value:.10}")
}

/// Rows of a curve, one per maturity.
pub fn curve_points(curve: &MaturityCurve) -> Vec<CurvePoint> {
    curve
        .iter()
        .map(|(maturity, value)| CurvePoint { maturity, value })
        .collect()
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints key-value pairs: a table, a JSON object, or two CSV columns.
pub fn print_key_values(title: &str, pairs: &[KeyValue], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(title);
            print_table(pairs)
        }
        OutputFormat::Json => {
            let object: serde_json::Map<String, serde_json::Value> = pairs
                .iter()
                .map(|p| (p.key.clone(), serde_json::Value::String(p.value.clone())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&object)?);
            Ok(())
        }
        OutputFormat::Csv => print_csv(pairs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_points_keep_origin() {
        let points = curve_points(&MaturityCurve::new(1, vec![0.01, 0.02]));
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].maturity, 1);
        assert_eq!(points[1].maturity, 2);
        assert_eq!(points[1].value, 0.02);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&0.0125), "0.0125000000");
    }
}
