//! Par curve from a short-end spot curve plus swap points.

use crate::curve::RateTable;
use crate::error::{CurveError, CurveResult};

/// Maturities taken from the spot curve when building a par curve.
pub const SHORT_END_YEARS: u32 = 20;

/// Builds a par curve from the short end of a spot curve and swap points.
///
/// Maturities `1..=20` are bootstrapped from the annually compounded spot
/// rates in `rfr`:
///
/// ```text
/// par(d) = (1 - (1 + r_d)^-d) / sum_{i=1..d} (1 + r_i)^-i
/// ```
///
/// Each entry of `extra_swaps` is then added with `cra` subtracted,
/// replacing a bootstrapped value at the same maturity.
///
/// # Errors
///
/// Returns [`CurveError::MissingRate`] if `rfr` lacks any maturity in
/// `1..=20`.
pub fn build_par_curve(
    rfr: &RateTable,
    extra_swaps: &RateTable,
    cra: f64,
) -> CurveResult<RateTable> {
    let mut par_curve = RateTable::new();
    let mut annuity = 0.0;

    for maturity in 1..=SHORT_END_YEARS {
        let rate = rfr
            .get(&maturity)
            .copied()
            .ok_or(CurveError::MissingRate { maturity })?;
        let df = (1.0 + rate).powi(-(maturity as i32));
        annuity += df;
        if annuity == 0.0 || !annuity.is_finite() {
            return Err(CurveError::invalid_input(format!(
                "degenerate annuity at maturity {maturity} (rate {rate})"
            )));
        }
        par_curve.insert(maturity, (1.0 - df) / annuity);
    }

    for (&maturity, &swap) in extra_swaps {
        if maturity == 0 {
            return Err(CurveError::invalid_input("swap maturities must be positive"));
        }
        par_curve.insert(maturity, swap - cra);
    }

    Ok(par_curve)
}
