//! Forward rates to annually compounded spot rates.

use crate::curve::MaturityCurve;
use crate::error::{CurveError, CurveResult};

/// Compounds single-period forward rates into spot rates.
///
/// `forwards` must start at maturity 1. The spot rate at maturity `i`
/// satisfies `(1 + s_i)^i = prod_{j=1..i} (1 + f_j)`; the accumulation is
/// done through the previous spot rate so `s_1 = f_1` exactly.
///
/// # Errors
///
/// Fails if the curve does not start at maturity 1 or if compounding
/// produces a non-finite rate (a forward at or below -100%).
pub fn forward_to_term_structure(forwards: &MaturityCurve) -> CurveResult<MaturityCurve> {
    if forwards.origin() != 1 {
        return Err(CurveError::invalid_input(format!(
            "forward curve must start at maturity 1, got {}",
            forwards.origin()
        )));
    }

    let mut spots = Vec::with_capacity(forwards.len());
    let mut accumulated = 1.0;

    for (maturity, forward) in forwards.iter() {
        let spot = if maturity == 1 {
            forward
        } else {
            (accumulated * (1.0 + forward)).powf(1.0 / f64::from(maturity)) - 1.0
        };
        if !spot.is_finite() {
            return Err(CurveError::invalid_input(format!(
                "spot rate at maturity {maturity} is not finite"
            )));
        }
        accumulated = (1.0 + spot).powi(maturity as i32);
        spots.push(spot);
    }

    Ok(MaturityCurve::new(1, spots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_flat_forwards() {
        let forwards = MaturityCurve::new(1, vec![0.025; 50]);
        let spots = forward_to_term_structure(&forwards).unwrap();

        assert_eq!(spots.len(), 50);
        assert_eq!(spots.origin(), 1);
        for (_, spot) in spots.iter() {
            assert_abs_diff_eq!(spot, 0.025, epsilon = 1e-13);
        }
    }

    #[test]
    fn test_two_periods() {
        let forwards = MaturityCurve::new(1, vec![0.01, 0.03]);
        let spots = forward_to_term_structure(&forwards).unwrap();

        assert_eq!(spots.get(1), Some(0.01));
        assert_abs_diff_eq!(
            spots.get(2).unwrap(),
            (1.01f64 * 1.03).sqrt() - 1.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_rejects_wrong_origin() {
        let forwards = MaturityCurve::new(0, vec![0.01, 0.02]);
        assert!(forward_to_term_structure(&forwards).is_err());
    }

    #[test]
    fn test_rejects_total_loss_forward() {
        let forwards = MaturityCurve::new(1, vec![0.01, -1.5, 0.02]);
        assert!(forward_to_term_structure(&forwards).is_err());
    }

    #[test]
    fn test_empty_curve() {
        let spots = forward_to_term_structure(&MaturityCurve::new(1, vec![])).unwrap();
        assert!(spots.is_empty());
    }
}
