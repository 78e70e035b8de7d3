//! Matrix classification
//!
//! The two checks this crate exists for: a matrix is **Hermitian** when it
//! equals its own conjugate transpose, and **unitary** when its product with
//! its conjugate transpose equals the identity. Both comparisons run
//! element-wise under a [`Tolerance`] policy, so nearly-Hermitian
//! floating-point input still classifies as Hermitian.
//!
//! [`classify`] is pure and deterministic: same matrix and tolerance, same
//! labels. Cost is O(N³), dominated by the product in the unitary check.
//!
//! # Examples
//!
//! ```
//! use classr::classify::{classify, MatrixKind, Tolerance};
//! use classr::matrix::Matrix;
//!
//! let eye = Matrix::identity(2);
//! assert_eq!(
//!     classify(&eye, Tolerance::default()),
//!     vec![MatrixKind::Hermitian, MatrixKind::Unitary]
//! );
//! ```

use std::fmt;

use crate::matrix::Matrix;

/// Classification label for a complex square matrix
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatrixKind {
    /// Equal to its own conjugate transpose
    Hermitian,
    /// Its product with its own conjugate transpose is the identity
    Unitary,
    /// Neither Hermitian nor unitary
    None,
}

impl MatrixKind {
    /// Human-readable label name
    pub fn name(&self) -> &'static str {
        match self {
            MatrixKind::Hermitian => "Hermitian",
            MatrixKind::Unitary => "Unitary",
            MatrixKind::None => "None",
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Absolute/relative bounds for approximate complex equality.
///
/// Two values `x`, `y` are close when `|x - y| <= atol + rtol * |y|`, with
/// `|·|` the complex magnitude. Defaults match the conventional
/// floating-point closeness bounds (`rtol = 1e-5`, `atol = 1e-8`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance {
    /// Absolute tolerance
    pub atol: f64,
    /// Relative tolerance, scaled by the reference value's magnitude
    pub rtol: f64,
}

impl Tolerance {
    /// Create a tolerance policy from explicit bounds
    pub const fn new(atol: f64, rtol: f64) -> Self {
        Self { atol, rtol }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            atol: 1e-8,
            rtol: 1e-5,
        }
    }
}

/// Element-wise approximate equality of two matrices.
///
/// `false` when the sizes differ or any element pair violates the tolerance
/// bound. Non-finite elements never compare close, so NaN/Infinity input
/// fails closeness rather than erroring.
pub fn allclose(a: &Matrix, b: &Matrix, tol: Tolerance) -> bool {
    a.n() == b.n()
        && a.as_slice()
            .iter()
            .zip(b.as_slice())
            .all(|(x, y)| (*x - *y).magnitude() <= tol.atol + tol.rtol * y.magnitude())
}

/// Whether `matrix` equals its own conjugate transpose within tolerance
pub fn is_hermitian(matrix: &Matrix, tol: Tolerance) -> bool {
    allclose(matrix, &matrix.conjugate_transpose(), tol)
}

/// Whether `matrix · matrix*` equals the identity within tolerance
pub fn is_unitary(matrix: &Matrix, tol: Tolerance) -> bool {
    matrix
        .matmul(&matrix.conjugate_transpose())
        .map(|product| allclose(&product, &Matrix::identity(matrix.n()), tol))
        .unwrap_or(false)
}

/// Classify a square complex matrix.
///
/// Labels appear in check order: [`MatrixKind::Hermitian`] first, then
/// [`MatrixKind::Unitary`]. When neither check passes the result is exactly
/// `[MatrixKind::None]` — the returned list is never empty and `None` never
/// co-occurs with another label.
pub fn classify(matrix: &Matrix, tol: Tolerance) -> Vec<MatrixKind> {
    let mut kinds = Vec::new();
    if is_hermitian(matrix, tol) {
        kinds.push(MatrixKind::Hermitian);
    }
    if is_unitary(matrix, tol) {
        kinds.push(MatrixKind::Unitary);
    }
    if kinds.is_empty() {
        kinds.push(MatrixKind::None);
    }
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::Complex;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(MatrixKind::Hermitian.to_string(), "Hermitian");
        assert_eq!(MatrixKind::Unitary.to_string(), "Unitary");
        assert_eq!(MatrixKind::None.to_string(), "None");
    }

    #[test]
    fn test_default_tolerance() {
        let tol = Tolerance::default();
        assert_eq!(tol.atol, 1e-8);
        assert_eq!(tol.rtol, 1e-5);
    }

    #[test]
    fn test_allclose_bound_is_inclusive() {
        let tol = Tolerance::new(1e-8, 0.0);
        let a = Matrix::from_vec(1, vec![c(1e-8, 0.0)]).unwrap();
        let zero = Matrix::from_vec(1, vec![Complex::ZERO]).unwrap();
        // |x - y| == atol exactly
        assert!(allclose(&a, &zero, tol));

        let b = Matrix::from_vec(1, vec![c(2e-8, 0.0)]).unwrap();
        assert!(!allclose(&b, &zero, tol));
    }

    #[test]
    fn test_allclose_is_relative_to_rhs() {
        let tol = Tolerance::new(0.0, 1e-5);
        let a = Matrix::from_vec(1, vec![c(1.0 + 5e-6, 0.0)]).unwrap();
        let b = Matrix::from_vec(1, vec![Complex::ONE]).unwrap();
        assert!(allclose(&a, &b, tol));
        // Against zero the relative term vanishes
        let zero = Matrix::from_vec(1, vec![Complex::ZERO]).unwrap();
        assert!(!allclose(&a, &zero, tol));
    }

    #[test]
    fn test_allclose_size_mismatch() {
        assert!(!allclose(
            &Matrix::identity(2),
            &Matrix::identity(3),
            Tolerance::default()
        ));
    }

    #[test]
    fn test_nan_never_close() {
        let tol = Tolerance::default();
        let nan = Matrix::from_vec(1, vec![c(f64::NAN, 0.0)]).unwrap();
        assert!(!allclose(&nan, &nan, tol));
        assert_eq!(classify(&nan, tol), vec![MatrixKind::None]);
    }
}
