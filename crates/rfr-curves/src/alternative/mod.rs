//! Alternative extrapolation.
//!
//! Converts a par curve into single-period forward rates that are constant
//! within each bucket between consecutive par maturities, and back into a
//! compounded spot curve. Past the last par maturity the last forward rate
//! is carried flat.
//!
//! - [`par_to_forward`]: bucketed Newton solve, par rates to forwards
//! - [`build_par_curve`]: par curve from a 20-year spot curve plus swap points
//! - [`forward_to_term_structure`]: forwards to annually compounded spot rates

mod par_curve;
mod par_forward;
mod term_structure;

pub use par_curve::{build_par_curve, SHORT_END_YEARS};
pub use par_forward::{
    discounted_value_par_to_forwards, par_to_forward, par_to_forward_detailed, BucketSolve,
    ParForwardResult,
};
pub use term_structure::forward_to_term_structure;

/// Credit risk adjustment applied to swap points, per unit.
pub const DEFAULT_CRA: f64 = 0.001;

/// Newton tolerance on the discounted par value.
pub const DEFAULT_MAX_ERROR: f64 = 1e-10;

/// Newton iteration budget per bucket.
pub const DEFAULT_MAX_RUNS: u32 = 20;

/// Last maturity of the forward curve.
pub const DEFAULT_SPAN: u32 = 120;
