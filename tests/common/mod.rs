//! Common test utilities
#![allow(dead_code)]

use classr::complex::{parse_complex, Complex};
use classr::matrix::Matrix;

/// Shorthand complex constructor
pub fn c(re: f64, im: f64) -> Complex {
    Complex::new(re, im)
}

/// Build an n×n matrix from row-major literal tokens
pub fn matrix_of(n: usize, tokens: &[&str]) -> Matrix {
    let cells: Vec<Complex> = tokens
        .iter()
        .map(|t| parse_complex(t).expect("test token must parse"))
        .collect();
    Matrix::from_vec(n, cells).expect("test grid must be square")
}

/// Assert two complex slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_complex(a: &[Complex], b: &[Complex], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (*x - *y).magnitude();
        let tol = atol + rtol * y.magnitude();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
