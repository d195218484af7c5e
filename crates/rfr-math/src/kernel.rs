//! Smith-Wilson kernel functions.
//!
//! The kernel `H(u, v)` is evaluated on arguments that are already scaled by
//! the convergence speed, i.e. `H(alpha * t, alpha * u)`. Written out it is
//!
//! ```text
//! H(u, v) = (u + v + exp(-(u + v))) / 2 - (|u - v| + exp(-|u - v|)) / 2
//!         = min(u, v) - exp(-max(u, v)) * sinh(min(u, v))
//! ```
//!
//! The matrix builders below lay the kernel out over the integer grids used
//! by calibration (`m x m`) and by curve evaluation (`(horizon + 1) x m`).
//! Row and column indices are zero based; the cash-flow grid uses
//! `(j + 1) / nrofcoup` while the output grid starts at maturity zero.

use nalgebra::DMatrix;

/// The Smith-Wilson kernel `H(u, v)`.
///
/// Symmetric in its arguments and defined for all real inputs.
///
/// # Example
///
/// ```rust
/// use rfr_math::kernel::big_h;
///
/// let h = big_h(1.1, 1.2);
/// assert!((h - 0.697710712843422).abs() < 1e-12);
/// ```
#[inline]
pub fn big_h(u: f64, v: f64) -> f64 {
    let left = (u + v + (-u - v).exp()) / 2.0;
    let diff = (u - v).abs();
    let right = (diff + (-diff).exp()) / 2.0;
    left - right
}

/// Builds the `m x m` kernel matrix over the cash-flow grid.
///
/// `H[i, j] = H(alpha * (i + 1) / nrofcoup, alpha * (j + 1) / nrofcoup)`.
pub fn h_matrix(alpha: f64, nrofcoup: u32, m: usize) -> DMatrix<f64> {
    let freq = f64::from(nrofcoup);
    DMatrix::from_fn(m, m, |i, j| {
        big_h(
            alpha * (i + 1) as f64 / freq,
            alpha * (j + 1) as f64 / freq,
        )
    })
}

/// Builds the `rows x m` kernel matrix between the output grid and the
/// cash-flow grid.
///
/// `H_ext[i, j] = H(alpha * i / nrofcoup, alpha * (j + 1) / nrofcoup)`, so row
/// `t` holds the kernel weights for maturity `t` (row 0 is maturity zero).
pub fn h_extended_matrix(alpha: f64, nrofcoup: u32, rows: usize, m: usize) -> DMatrix<f64> {
    let freq = f64::from(nrofcoup);
    DMatrix::from_fn(rows, m, |i, j| {
        big_h(alpha * i as f64 / freq, alpha * (j + 1) as f64 / freq)
    })
}

/// Builds the `rows x m` matrix of kernel derivatives used for intensities.
///
/// ```text
/// G[i, j] = alpha * (1 - exp(-alpha * j / nrofcoup) * cosh(alpha * i))   if j / nrofcoup > i
///         = alpha * exp(-alpha * i) * sinh(alpha * j / nrofcoup)         otherwise
/// ```
///
/// The column index enters unshifted, which is the layout the regulatory
/// reference figures were produced with.
pub fn g_matrix(alpha: f64, nrofcoup: u32, rows: usize, m: usize) -> DMatrix<f64> {
    let freq = f64::from(nrofcoup);
    DMatrix::from_fn(rows, m, |i, j| {
        let t = i as f64;
        let u = j as f64 / freq;
        if u > t {
            alpha * (1.0 - (-alpha * u).exp() * (alpha * t).cosh())
        } else {
            alpha * (-alpha * t).exp() * (alpha * u).sinh()
        }
    })
}
