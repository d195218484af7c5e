//! Decimal rounding of calibrated parameters.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{MathError, MathResult};

/// Rounds `value` to `decimals` decimal digits, ties to even.
///
/// The rounding is performed in decimal arithmetic so that values such as
/// `0.1234565` round the way they read rather than the way their binary
/// representation happens to fall.
pub fn round_half_even(value: f64, decimals: u32) -> MathResult<f64> {
    let decimal = Decimal::from_f64(value).ok_or_else(|| MathError::non_finite("rounding"))?;
    decimal
        .round_dp(decimals)
        .to_f64()
        .ok_or_else(|| MathError::non_finite("rounding"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_round_six_decimals() {
        assert_abs_diff_eq!(
            round_half_even(0.128_347_812_3, 6).unwrap(),
            0.128348,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_round_ties_to_even() {
        assert_abs_diff_eq!(round_half_even(0.125, 2).unwrap(), 0.12, epsilon = 1e-15);
        assert_abs_diff_eq!(round_half_even(0.375, 2).unwrap(), 0.38, epsilon = 1e-15);
    }

    #[test]
    fn test_round_rejects_nan() {
        assert!(round_half_even(f64::NAN, 6).is_err());
    }
}
