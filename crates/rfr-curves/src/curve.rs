//! Maturity-indexed value types.
//!
//! - [`LiquidRates`]: validated `(maturity, rate)` pairs used for calibration
//! - [`MaturityCurve`]: a contiguous curve over integer maturities
//! - [`RateTable`]: a sparse maturity to rate map (par curves, swap points)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Sparse maturity to rate table, ordered by maturity.
pub type RateTable = BTreeMap<u32, f64>;

/// Liquid market rates at strictly increasing positive integer maturities.
///
/// Rates are per annum in per-unit terms (0.01 is one percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(u32, f64)>", into = "Vec<(u32, f64)>")]
pub struct LiquidRates {
    points: Vec<(u32, f64)>,
}

impl LiquidRates {
    /// Creates a liquid rate set from `(maturity, rate)` pairs.
    ///
    /// Fails when the set is empty, a maturity is zero, maturities are not
    /// strictly increasing, or a rate is not finite.
    pub fn new(points: Vec<(u32, f64)>) -> CurveResult<Self> {
        if points.is_empty() {
            return Err(CurveError::invalid_input("at least one liquid rate is required"));
        }

        let mut previous = 0;
        for &(maturity, rate) in &points {
            if maturity == 0 {
                return Err(CurveError::invalid_input("liquid maturities must be positive"));
            }
            if maturity <= previous {
                return Err(CurveError::invalid_input(format!(
                    "liquid maturities must be strictly increasing: {maturity} follows {previous}"
                )));
            }
            if !rate.is_finite() {
                return Err(CurveError::invalid_input(format!(
                    "rate at maturity {maturity} is not finite"
                )));
            }
            previous = maturity;
        }

        Ok(Self { points })
    }

    /// Selects the liquid maturities from a full rate table.
    ///
    /// Every listed maturity must have a rate in `rates`.
    pub fn from_table(maturities: &[u32], rates: &RateTable) -> CurveResult<Self> {
        let points = maturities
            .iter()
            .map(|&maturity| {
                rates
                    .get(&maturity)
                    .map(|&rate| (maturity, rate))
                    .ok_or(CurveError::MissingRate { maturity })
            })
            .collect::<CurveResult<Vec<_>>>()?;

        Self::new(points)
    }

    /// Number of liquid rates.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed set; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest liquid maturity.
    pub fn last_maturity(&self) -> u32 {
        self.points.last().map_or(0, |&(maturity, _)| maturity)
    }

    /// Iterates over `(maturity, rate)` pairs in maturity order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.points.iter().copied()
    }

    /// Liquid maturities in order.
    pub fn maturities(&self) -> Vec<u32> {
        self.points.iter().map(|&(maturity, _)| maturity).collect()
    }

    /// Rate at `maturity`, if it is one of the liquid points.
    pub fn rate(&self, maturity: u32) -> Option<f64> {
        self.points
            .binary_search_by_key(&maturity, |&(m, _)| m)
            .ok()
            .map(|i| self.points[i].1)
    }
}

impl TryFrom<Vec<(u32, f64)>> for LiquidRates {
    type Error = CurveError;

    fn try_from(points: Vec<(u32, f64)>) -> CurveResult<Self> {
        Self::new(points)
    }
}

impl From<LiquidRates> for Vec<(u32, f64)> {
    fn from(liquid: LiquidRates) -> Self {
        liquid.points
    }
}

/// A curve over contiguous integer maturities `origin, origin + 1, ...`.
///
/// Smith-Wilson outputs start at maturity 0; forward and term structures from
/// the alternative extrapolation start at maturity 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityCurve {
    origin: u32,
    values: Vec<f64>,
}

impl MaturityCurve {
    /// Creates a curve whose first value belongs to maturity `origin`.
    pub fn new(origin: u32, values: Vec<f64>) -> Self {
        Self { origin, values }
    }

    /// First maturity of the curve.
    pub fn origin(&self) -> u32 {
        self.origin
    }

    /// Last maturity of the curve, or `None` for an empty curve.
    pub fn last_maturity(&self) -> Option<u32> {
        (!self.values.is_empty()).then(|| self.origin + self.values.len() as u32 - 1)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `maturity`.
    pub fn get(&self, maturity: u32) -> Option<f64> {
        let offset = maturity.checked_sub(self.origin)?;
        self.values.get(offset as usize).copied()
    }

    /// Raw values, starting at `origin`.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the curve and returns its values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Iterates over `(maturity, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (self.origin..).zip(self.values.iter().copied())
    }

    /// Converts the curve into a sparse table.
    pub fn to_table(&self) -> RateTable {
        self.iter().collect()
    }
}
