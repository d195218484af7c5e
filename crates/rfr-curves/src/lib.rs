//! # RFR Curves
//!
//! Risk-free rate curve construction for Solvency II style regulation.
//!
//! This crate provides two independent pipelines:
//!
//! - **Smith-Wilson**: calibrate the convergence speed `alpha` and the weight
//!   vector `gamma` to a set of liquid zero rates, then evaluate discount
//!   factors, zero rates, forward rates and intensities out to a fixed
//!   horizon, converging to the ultimate forward rate (UFR).
//! - **Alternative extrapolation**: convert a par curve into bucketed
//!   single-period forward rates with a per-bucket Newton solve, build par
//!   curves from a short-end spot curve plus swap points, and turn forward
//!   curves back into compounded spot curves.
//!
//! Inputs and outputs are plain maturity-indexed tables. Every call builds
//! and discards its own matrices; nothing is cached between calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use rfr_curves::prelude::*;
//!
//! let liquid = LiquidRates::new(vec![(1, 0.01), (2, 0.012), (5, 0.015), (10, 0.018)]).unwrap();
//! let params = SmithWilsonParams::default().with_ufr(0.036);
//!
//! let fit = smith_wilson(&liquid, &params).unwrap();
//! let zero = fit.curve.zero_rates();
//! assert!((zero.get(5).unwrap() - 0.015).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]

pub mod alternative;
pub mod calibration;
pub mod curve;
pub mod error;
pub mod evaluator;
pub mod instruments;
pub mod smith_wilson;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::alternative::{
        build_par_curve, discounted_value_par_to_forwards, forward_to_term_structure,
        par_to_forward, par_to_forward_detailed, BucketSolve, ParForwardResult,
    };
    pub use crate::calibration::{calibrate_alpha, AlphaCalibrator, CalibrationResult};
    pub use crate::curve::{LiquidRates, MaturityCurve, RateTable};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::evaluator::{evaluate_curve, CurveOutput, OutputType, SmithWilsonCurve};
    pub use crate::instruments::{pricing_matrix, CalibrationMethod, Instrument};
    pub use crate::smith_wilson::{
        smith_wilson, smith_wilson_batch, smith_wilson_output, SmithWilsonFit, SmithWilsonParams,
    };
}

pub use curve::{LiquidRates, MaturityCurve, RateTable};
pub use error::{CurveError, CurveResult};
pub use evaluator::{CurveOutput, OutputType, SmithWilsonCurve};
pub use smith_wilson::{smith_wilson, SmithWilsonFit, SmithWilsonParams};
