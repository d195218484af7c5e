//! Root-finding procedures.
//!
//! Two deliberately narrow solvers live here:
//!
//! - [`newton_raphson`]: Newton iteration on a function that returns its
//!   value and derivative together, with a hard iteration budget. When the
//!   budget runs out the last iterate is returned with `converged = false`.
//! - [`decimal_scan`]: the deterministic digit-by-digit scan used to pick the
//!   Smith-Wilson convergence speed. It is not a general root finder; the
//!   sequence of trial points is part of its contract.
//!
//! Neither solver treats non-convergence as an error. Callers inspect the
//! `converged` flag and decide how loudly to report it.

mod decimal_scan;
mod newton;

pub use decimal_scan::{decimal_scan, ScanConfig, ScanOutcome};
pub use newton::{newton_raphson, NewtonOutcome};

/// Default absolute tolerance on the Newton residual.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default Newton iteration budget.
pub const DEFAULT_MAX_ITERATIONS: u32 = 20;

/// Configuration for budgeted iterative solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance on the residual.
    pub tolerance: f64,
    /// Maximum number of update steps.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
