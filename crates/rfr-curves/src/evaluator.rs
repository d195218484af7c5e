//! Smith-Wilson curve evaluation.
//!
//! Given a calibrated `alpha` and weight vector `gamma`, the discount
//! function on the integer grid `t = 0..=horizon` is
//!
//! ```text
//! P(t) = exp(-ln(1 + ufr) * t) * (1 + sum_j H(alpha t, alpha u_j) gamma_j)
//! ```
//!
//! All curve variants are derived from one pass over the kernel matrices and
//! returned together in a [`SmithWilsonCurve`]; [`OutputType`] picks one of
//! them for callers that only want a single series.

use std::fmt;

use log::debug;
use nalgebra::DVector;
use rfr_math::kernel::{g_matrix, h_extended_matrix};
use serde::{Deserialize, Serialize};

use crate::curve::MaturityCurve;
use crate::error::{CurveError, CurveResult};

/// Default output horizon in years.
pub const DEFAULT_HORIZON: usize = 120;

/// The curve variant requested from a Smith-Wilson evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    /// Zero rates, annual compounding.
    #[default]
    ZeroRates,
    /// One-year forward rates, annual compounding.
    ForwardRates,
    /// Discount factors.
    DiscountFactors,
    /// Instantaneous forward intensities.
    ForwardIntensities,
    /// Yield intensities (continuously compounded zero rates).
    YieldIntensities,
    /// The calibrated convergence speed.
    Alpha,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ZeroRates => "zero rates annual compounding",
            Self::ForwardRates => "forward rates annual compounding",
            Self::DiscountFactors => "discount factors",
            Self::ForwardIntensities => "forward intensities",
            Self::YieldIntensities => "yield intensities",
            Self::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

/// A single output selected by [`OutputType`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CurveOutput {
    /// A curve over maturities `0..=horizon`.
    Curve(MaturityCurve),
    /// The calibrated alpha.
    Alpha(f64),
}

impl CurveOutput {
    /// The curve, if this output is one.
    pub fn as_curve(&self) -> Option<&MaturityCurve> {
        match self {
            Self::Curve(curve) => Some(curve),
            Self::Alpha(_) => None,
        }
    }

    /// The alpha, if this output is one.
    pub fn as_alpha(&self) -> Option<f64> {
        match self {
            Self::Alpha(alpha) => Some(*alpha),
            Self::Curve(_) => None,
        }
    }
}

/// Every curve variant produced by one Smith-Wilson evaluation.
///
/// All curves run over maturities `0..=horizon`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmithWilsonCurve {
    alpha: f64,
    ufr: f64,
    discount_factors: MaturityCurve,
    zero_rates: MaturityCurve,
    forward_rates: MaturityCurve,
    forward_intensities: MaturityCurve,
    yield_intensities: MaturityCurve,
}

impl SmithWilsonCurve {
    /// Convergence speed the curve was evaluated with.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Ultimate forward rate (annual compounding).
    pub fn ufr(&self) -> f64 {
        self.ufr
    }

    /// Last maturity of the curves.
    pub fn horizon(&self) -> u32 {
        self.discount_factors.last_maturity().unwrap_or(0)
    }

    /// Discount factors, `P(0) = 1`.
    pub fn discount_factors(&self) -> &MaturityCurve {
        &self.discount_factors
    }

    /// Zero rates with annual compounding, 0 at maturity 0.
    pub fn zero_rates(&self) -> &MaturityCurve {
        &self.zero_rates
    }

    /// One-year forward rates with annual compounding, 0 at maturity 0.
    pub fn forward_rates(&self) -> &MaturityCurve {
        &self.forward_rates
    }

    /// Forward intensities.
    pub fn forward_intensities(&self) -> &MaturityCurve {
        &self.forward_intensities
    }

    /// Yield intensities.
    pub fn yield_intensities(&self) -> &MaturityCurve {
        &self.yield_intensities
    }

    /// Selects one output.
    pub fn output(&self, kind: OutputType) -> CurveOutput {
        match kind {
            OutputType::ZeroRates => CurveOutput::Curve(self.zero_rates.clone()),
            OutputType::ForwardRates => CurveOutput::Curve(self.forward_rates.clone()),
            OutputType::DiscountFactors => CurveOutput::Curve(self.discount_factors.clone()),
            OutputType::ForwardIntensities => CurveOutput::Curve(self.forward_intensities.clone()),
            OutputType::YieldIntensities => CurveOutput::Curve(self.yield_intensities.clone()),
            OutputType::Alpha => CurveOutput::Alpha(self.alpha),
        }
    }
}

/// Evaluates the Smith-Wilson curves on maturities `0..=horizon`.
///
/// `ufr` is annually compounded; `gamma` is the calibrated weight vector of
/// length `m = nrofcoup * last liquid maturity`.
///
/// A discount factor that is not strictly positive makes the rate
/// conversions undefined and is reported as
/// [`CurveError::NonPositiveDiscountFactor`].
pub fn evaluate_curve(
    alpha: f64,
    gamma: &DVector<f64>,
    ufr: f64,
    nrofcoup: u32,
    horizon: usize,
) -> CurveResult<SmithWilsonCurve> {
    if !(alpha.is_finite() && alpha > 0.0) {
        return Err(CurveError::invalid_input(format!("alpha must be positive, got {alpha}")));
    }
    if gamma.is_empty() {
        return Err(CurveError::invalid_input("gamma is empty"));
    }
    if nrofcoup == 0 {
        return Err(CurveError::invalid_input("nrofcoup must be positive"));
    }
    if horizon == 0 {
        return Err(CurveError::invalid_input("horizon must be at least 1"));
    }

    let rows = horizon + 1;
    let m = gamma.len();
    let freq = f64::from(nrofcoup);
    let log_ufr = (1.0 + ufr).ln();

    let kernel = h_extended_matrix(alpha, nrofcoup, rows, m) * gamma;
    let kernel_slope = g_matrix(alpha, nrofcoup, rows, m) * gamma;

    // Limit of both intensities at t = 0.
    let decay_weight: f64 = gamma
        .iter()
        .enumerate()
        .map(|(i, g)| (1.0 - (-alpha * (i + 1) as f64 / freq).exp()) * g)
        .sum();
    let short_intensity = log_ufr - alpha * decay_weight;

    let mut discount = vec![0.0; rows];
    let mut zero = vec![0.0; rows];
    let mut forward = vec![0.0; rows];
    let mut forward_intensity = vec![0.0; rows];
    let mut yield_intensity = vec![0.0; rows];

    discount[0] = 1.0;
    forward_intensity[0] = short_intensity;
    yield_intensity[0] = short_intensity;

    for t in 1..rows {
        let years = t as f64;
        let df = (-log_ufr * years).exp() * (1.0 + kernel[t]);
        if !(df.is_finite() && df > 0.0) {
            return Err(CurveError::NonPositiveDiscountFactor {
                maturity: t,
                value: df,
            });
        }

        discount[t] = df;
        zero[t] = df.powf(-1.0 / years) - 1.0;
        forward[t] = discount[t - 1] / df - 1.0;
        yield_intensity[t] = log_ufr - (1.0 + kernel[t]).ln() / years;
        forward_intensity[t] = log_ufr - kernel_slope[t] / (1.0 + kernel[t]);
    }

    debug!("evaluated Smith-Wilson curve: alpha = {alpha}, horizon = {horizon}");

    Ok(SmithWilsonCurve {
        alpha,
        ufr,
        discount_factors: MaturityCurve::new(0, discount),
        zero_rates: MaturityCurve::new(0, zero),
        forward_rates: MaturityCurve::new(0, forward),
        forward_intensities: MaturityCurve::new(0, forward_intensity),
        yield_intensities: MaturityCurve::new(0, yield_intensity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_gamma_is_flat_ufr_curve() {
        // Without kernel weights the curve is exactly the UFR curve.
        let ufr = 0.042;
        let gamma = DVector::zeros(10);
        let curve = evaluate_curve(0.1, &gamma, ufr, 1, 30).unwrap();

        assert_eq!(curve.zero_rates().len(), 31);
        assert_abs_diff_eq!(curve.discount_factors().get(0).unwrap(), 1.0);
        assert_abs_diff_eq!(curve.zero_rates().get(0).unwrap(), 0.0);
        for t in 1..=30 {
            assert_abs_diff_eq!(curve.zero_rates().get(t).unwrap(), ufr, epsilon = 1e-12);
            assert_abs_diff_eq!(curve.forward_rates().get(t).unwrap(), ufr, epsilon = 1e-12);
            assert_abs_diff_eq!(
                curve.forward_intensities().get(t).unwrap(),
                1.042_f64.ln(),
                epsilon = 1e-12
            );
        }
        assert_abs_diff_eq!(curve.yield_intensities().get(0).unwrap(), 1.042_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_output_selection() {
        let gamma = DVector::from_element(5, 0.001);
        let curve = evaluate_curve(0.2, &gamma, 0.03, 1, 10).unwrap();

        assert_eq!(curve.output(OutputType::Alpha), CurveOutput::Alpha(0.2));
        assert_eq!(
            curve.output(OutputType::DiscountFactors).as_curve(),
            Some(curve.discount_factors())
        );
        assert_eq!(curve.output(OutputType::ZeroRates).as_alpha(), None);
        assert_eq!(curve.horizon(), 10);
    }

    #[test]
    fn test_rates_consistent_with_discount_factors() {
        let gamma = DVector::from_vec(vec![0.02, -0.01, 0.005, 0.003]);
        let curve = evaluate_curve(0.15, &gamma, 0.035, 1, 20).unwrap();

        for t in 1..=20_u32 {
            let df = curve.discount_factors().get(t).unwrap();
            let zero = curve.zero_rates().get(t).unwrap();
            assert_abs_diff_eq!((1.0 + zero).powf(-f64::from(t)), df, epsilon = 1e-12);

            let yield_intensity = curve.yield_intensities().get(t).unwrap();
            assert_abs_diff_eq!((-yield_intensity * f64::from(t)).exp(), df, epsilon = 1e-12);

            let previous = curve.discount_factors().get(t - 1).unwrap();
            let forward = curve.forward_rates().get(t).unwrap();
            assert_abs_diff_eq!(previous / (1.0 + forward), df, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negative_discount_factor_is_an_error() {
        let gamma = DVector::from_element(3, -10.0);
        let err = evaluate_curve(0.5, &gamma, 0.0, 1, 10).unwrap_err();

        assert!(matches!(err, CurveError::NonPositiveDiscountFactor { maturity: 1, .. }));
    }

    #[test]
    fn test_invalid_arguments() {
        let gamma = DVector::from_element(3, 0.0);
        assert!(evaluate_curve(0.0, &gamma, 0.0, 1, 10).is_err());
        assert!(evaluate_curve(0.1, &DVector::zeros(0), 0.0, 1, 10).is_err());
        assert!(evaluate_curve(0.1, &gamma, 0.0, 1, 0).is_err());
    }

    #[test]
    fn test_output_type_display() {
        assert_eq!(OutputType::ZeroRates.to_string(), "zero rates annual compounding");
        assert_eq!(OutputType::Alpha.to_string(), "alpha");
    }
}
