//! Linear algebra utilities.
//!
//! Thin wrappers over `nalgebra` that turn shape problems and singular
//! systems into [`MathError`]s instead of panics or `None`.

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// Solves the dense linear system `Ax = b`.
///
/// Uses LU decomposition with partial pivoting. A zero pivot, or a solution
/// that is not finite, is reported as [`MathError::SingularMatrix`].
///
/// # Example
///
/// ```rust
/// use nalgebra::{DMatrix, DVector};
/// use rfr_math::linear_algebra::solve_linear_system;
///
/// let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
/// let b = DVector::from_vec(vec![5.0, 5.0]);
/// let x = solve_linear_system(&a, &b).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// ```
pub fn solve_linear_system(a: &DMatrix<f64>, b: &DVector<f64>) -> MathResult<DVector<f64>> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(MathError::invalid_input("Matrix must be square"));
    }
    if n != b.len() {
        return Err(MathError::DimensionMismatch {
            rows1: n,
            cols1: n,
            rows2: b.len(),
            cols2: 1,
        });
    }

    // `LU::solve` only fails on a zero pivot whose right-hand side entry is
    // non-zero, so invertibility is checked up front.
    let lu = a.clone().lu();
    if !lu.is_invertible() {
        return Err(MathError::SingularMatrix);
    }
    let x = lu.solve(b).ok_or(MathError::SingularMatrix)?;

    if x.iter().any(|v| !v.is_finite()) {
        return Err(MathError::SingularMatrix);
    }

    Ok(x)
}

/// Returns the vector of row sums, i.e. `A * 1`.
pub fn row_sums(a: &DMatrix<f64>) -> DVector<f64> {
    DVector::from_fn(a.nrows(), |i, _| a.row(i).sum())
}
