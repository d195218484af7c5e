//! # RFR Math
//!
//! Numerical building blocks for the RFR curve engine.
//!
//! This crate provides:
//!
//! - **Kernel**: The Smith-Wilson kernel `H` and the matrix builders used by
//!   calibration and curve evaluation
//! - **Linear Algebra**: Dense solves over `nalgebra` matrices
//! - **Solvers**: Budgeted Newton-Raphson and the deterministic decimal scan
//! - **Rounding**: Half-to-even decimal rounding of calibrated parameters
//!
//! All functions are pure: they allocate their own matrices and share no
//! state between calls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod kernel;
pub mod linear_algebra;
pub mod rounding;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::kernel::{big_h, g_matrix, h_extended_matrix, h_matrix};
    pub use crate::linear_algebra::{row_sums, solve_linear_system};
    pub use crate::rounding::round_half_even;
    pub use crate::solvers::{
        decimal_scan, newton_raphson, NewtonOutcome, ScanConfig, ScanOutcome, SolverConfig,
    };
}

pub use error::{MathError, MathResult};
