//! Calibration instruments and the pricing matrix.
//!
//! Every liquid instrument is priced at 1 by construction. A zero-coupon
//! instrument with rate `r` and maturity `u` has a single pay-off of
//! `(1 + r - cra)^u` at `u`; discounted at the UFR it becomes the only
//! non-zero entry of its row of `Q`, in column `u - 1`.

use std::fmt;

use log::debug;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::curve::LiquidRates;
use crate::error::{CurveError, CurveResult};

/// Instrument type of the liquid rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    /// Zero-coupon rates.
    #[default]
    Zero,
    /// Par swap rates.
    Swap,
    /// Par bond yields.
    Bond,
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "zero"),
            Self::Swap => write!(f, "swap"),
            Self::Bond => write!(f, "bond"),
        }
    }
}

/// Method used to search for the convergence speed alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationMethod {
    /// Deterministic decimal scan over alpha.
    #[default]
    BruteForce,
    /// Bisection on `g(alpha) - tau`.
    Bisection,
    /// Newton iteration on `g(alpha) - tau`.
    Newton,
}

impl fmt::Display for CalibrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BruteForce => write!(f, "brute_force"),
            Self::Bisection => write!(f, "bisection"),
            Self::Newton => write!(f, "newton"),
        }
    }
}

/// Checks that the instrument and coupon frequency can be calibrated.
///
/// Only zero-coupon instruments with `nrofcoup == 1` are supported.
pub fn check_instrument(instrument: Instrument, nrofcoup: u32) -> CurveResult<()> {
    if instrument == Instrument::Zero && nrofcoup != 1 {
        return Err(CurveError::configuration(format!(
            "zero-coupon instruments require nrofcoup = 1, got {nrofcoup}"
        )));
    }
    if instrument != Instrument::Zero {
        return Err(CurveError::configuration(format!(
            "instrument '{instrument}' is not supported, only zero-coupon rates can be calibrated"
        )));
    }
    Ok(())
}

/// Builds the `n x m` pricing matrix `Q` for the liquid rates.
///
/// `n` is the number of liquid rates and `m = nrofcoup * last maturity`.
/// `cra` is in per-unit terms and is subtracted from each rate; `log_ufr` is
/// `ln(1 + ufr)`.
pub fn pricing_matrix(
    instrument: Instrument,
    liquid: &LiquidRates,
    nrofcoup: u32,
    cra: f64,
    log_ufr: f64,
) -> CurveResult<DMatrix<f64>> {
    check_instrument(instrument, nrofcoup)?;

    let n = liquid.len();
    let m = (nrofcoup * liquid.last_maturity()) as usize;
    let mut q = DMatrix::zeros(n, m);

    for (row, (maturity, rate)) in liquid.iter().enumerate() {
        let u = f64::from(maturity);
        q[(row, maturity as usize - 1)] = (-log_ufr * u).exp() * (1.0 + rate - cra).powf(u);
    }

    debug!("pricing matrix: {n} instruments over {m} cash-flow dates");
    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_pricing_matrix() {
        let liquid = LiquidRates::new(vec![(1, 0.01), (3, 0.02)]).unwrap();
        let log_ufr = 1.042_f64.ln();
        let q = pricing_matrix(Instrument::Zero, &liquid, 1, 0.001, log_ufr).unwrap();

        assert_eq!(q.shape(), (2, 3));
        assert_relative_eq!(q[(0, 0)], (-log_ufr).exp() * 1.009, epsilon = 1e-14);
        assert_relative_eq!(
            q[(1, 2)],
            (-3.0 * log_ufr).exp() * 1.019_f64.powi(3),
            epsilon = 1e-14
        );
        // One non-zero entry per row.
        assert_eq!(q.row(0).iter().filter(|v| **v != 0.0).count(), 1);
        assert_eq!(q.row(1).iter().filter(|v| **v != 0.0).count(), 1);
    }

    #[test]
    fn test_zero_requires_annual_frequency() {
        let liquid = LiquidRates::new(vec![(1, 0.01)]).unwrap();
        let err = pricing_matrix(Instrument::Zero, &liquid, 2, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, CurveError::Configuration { .. }));
    }

    #[test]
    fn test_coupon_instruments_rejected() {
        assert!(matches!(
            check_instrument(Instrument::Swap, 1),
            Err(CurveError::Configuration { .. })
        ));
        assert!(matches!(
            check_instrument(Instrument::Bond, 2),
            Err(CurveError::Configuration { .. })
        ));
        assert!(check_instrument(Instrument::Zero, 1).is_ok());
    }

    #[test]
    fn test_enum_serde_names() {
        assert_eq!(
            serde_json::to_string(&CalibrationMethod::BruteForce).unwrap(),
            "\"brute_force\""
        );
        assert_eq!(serde_json::from_str::<Instrument>("\"zero\"").unwrap(), Instrument::Zero);
    }
}
