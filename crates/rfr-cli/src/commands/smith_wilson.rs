//! Smith-Wilson command implementation.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::info;

use rfr_config::RfrConfig;
use rfr_curves::{smith_wilson, CurveOutput, LiquidRates, OutputType};

use crate::cli::OutputFormat;
use crate::commands::parse_curve_data;
use crate::output::{
    curve_points, print_header, print_key_values, print_output, print_warning, CurvePoint,
    KeyValue,
};

/// Arguments for the smith-wilson command.
#[derive(Args, Debug)]
pub struct SmithWilsonArgs {
    /// Liquid maturities in years (comma-separated, e.g. "1,2,3,5,10,20")
    #[arg(long)]
    pub maturities: String,

    /// Liquid zero rates per unit (comma-separated, e.g. "-0.00525,-0.00553,0.00092")
    #[arg(long, allow_hyphen_values = true)]
    pub rates: String,

    /// Ultimate forward rate per unit
    #[arg(long, allow_hyphen_values = true)]
    pub ufr: Option<f64>,

    /// Credit risk adjustment in basis points
    #[arg(long, allow_hyphen_values = true)]
    pub cra: Option<f64>,

    /// Convergence tolerance in basis points
    #[arg(long)]
    pub tau: Option<f64>,

    /// Convergence maturity in years
    #[arg(long)]
    pub t2: Option<u32>,

    /// Lower bound of the alpha scan
    #[arg(long)]
    pub min_alpha: Option<f64>,

    /// Decimal digits of the calibrated alpha
    #[arg(long)]
    pub precision: Option<u32>,

    /// Last output maturity
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Curve to print
    #[arg(short, long, value_enum, default_value = "zero")]
    pub output: OutputChoice,
}

/// Output choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputChoice {
    /// Annually compounded zero rates
    Zero,
    /// One-year forward rates
    Forward,
    /// Discount factors
    Discount,
    /// Instantaneous forward intensities
    ForwardIntensity,
    /// Continuously compounded yields
    YieldIntensity,
    /// Calibrated alpha only
    Alpha,
}

impl From<OutputChoice> for OutputType {
    fn from(choice: OutputChoice) -> Self {
        match choice {
            OutputChoice::Zero => OutputType::ZeroRates,
            OutputChoice::Forward => OutputType::ForwardRates,
            OutputChoice::Discount => OutputType::DiscountFactors,
            OutputChoice::ForwardIntensity => OutputType::ForwardIntensities,
            OutputChoice::YieldIntensity => OutputType::YieldIntensities,
            OutputChoice::Alpha => OutputType::Alpha,
        }
    }
}

#[derive(Serialize)]
struct SmithWilsonReport {
    alpha: f64,
    converged: bool,
    output: String,
    curve: Vec<CurvePoint>,
}

/// Execute the smith-wilson command.
pub fn execute(args: SmithWilsonArgs, config: &RfrConfig, format: OutputFormat) -> Result<()> {
    let liquid = LiquidRates::new(parse_curve_data(&args.maturities, &args.rates)?)?;

    let mut settings = config.smith_wilson.clone();
    if let Some(ufr) = args.ufr {
        settings.ufr = ufr;
    }
    if let Some(cra) = args.cra {
        settings.cra = cra;
    }
    if let Some(tau) = args.tau {
        settings.tau = tau;
    }
    if let Some(t2) = args.t2 {
        settings.t2 = t2;
    }
    if let Some(min_alpha) = args.min_alpha {
        settings.min_alpha = min_alpha;
    }
    if let Some(precision) = args.precision {
        settings.precision = precision;
    }
    if let Some(horizon) = args.horizon {
        settings.horizon = horizon;
    }
    let params = settings.checked_params()?;

    let fit = smith_wilson(&liquid, &params)?;
    let calibration = &fit.calibration;
    info!(
        "calibrated alpha {} after {} evaluations",
        calibration.alpha, calibration.evaluations
    );
    if !calibration.converged {
        print_warning(&format!(
            "alpha scan found no root above {}; using alpha = {}",
            settings.min_alpha, calibration.alpha
        ));
    }

    let kind = OutputType::from(args.output);
    let curve = match fit.output(kind) {
        CurveOutput::Alpha(alpha) => {
            let pairs = vec![
                KeyValue::new("alpha", alpha.to_string()),
                KeyValue::new("converged", calibration.converged.to_string()),
                KeyValue::new("evaluations", calibration.evaluations.to_string()),
            ];
            return print_key_values("Smith-Wilson Calibration", &pairs, format);
        }
        CurveOutput::Curve(curve) => curve,
    };
    let points = curve_points(&curve);

    match format {
        OutputFormat::Table => {
            print_header(&format!("Smith-Wilson {kind}"));
            println!("Alpha: {}", calibration.alpha);
            println!("UFR: {}", settings.ufr);
            println!();
            print_output(&points, format)
        }
        OutputFormat::Json => {
            let report = SmithWilsonReport {
                alpha: calibration.alpha,
                converged: calibration.converged,
                output: kind.to_string(),
                curve: points,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        OutputFormat::Csv => print_output(&points, format),
    }
}
