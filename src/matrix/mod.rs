//! Dense square complex matrices
//!
//! [`Matrix`] is an N×N row-major grid of [`Complex`] values, N ≥ 1,
//! immutable after construction. Construction is checked: ragged or
//! non-square input is rejected with [`Error::ShapeMismatch`], so every
//! `Matrix` downstream code sees is square by construction.

use crate::complex::Complex;
use crate::error::{Error, Result};

/// Dense N×N matrix of complex scalars, row-major
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<Complex>,
}

impl Matrix {
    /// Build a matrix from `n * n` row-major values.
    ///
    /// Fails with [`Error::ShapeMismatch`] when `n == 0` or the data length
    /// is not `n * n`.
    pub fn from_vec(n: usize, data: Vec<Complex>) -> Result<Self> {
        if n == 0 || data.len() != n * n {
            return Err(Error::ShapeMismatch {
                expected: vec![n, n],
                got: vec![data.len()],
            });
        }
        Ok(Self { n, data })
    }

    /// Build a matrix from rows.
    ///
    /// Fails with [`Error::ShapeMismatch`] when the grid is empty, ragged,
    /// or not square.
    pub fn from_rows(rows: Vec<Vec<Complex>>) -> Result<Self> {
        let n = rows.len();
        for row in &rows {
            if row.len() != n {
                return Err(Error::ShapeMismatch {
                    expected: vec![n, n],
                    got: vec![n, row.len()],
                });
            }
        }
        let data: Vec<Complex> = rows.into_iter().flatten().collect();
        Self::from_vec(n, data)
    }

    /// The N×N identity matrix: 1 on the diagonal, 0 elsewhere
    pub fn identity(n: usize) -> Self {
        let mut data = vec![Complex::ZERO; n * n];
        for i in 0..n {
            data[i * n + i] = Complex::ONE;
        }
        Self { n, data }
    }

    /// Side length N
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Element at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex {
        assert!(row < self.n && col < self.n, "index out of bounds");
        self.data[row * self.n + col]
    }

    /// Row-major view of the elements
    #[inline]
    pub fn as_slice(&self) -> &[Complex] {
        &self.data
    }

    /// Conjugate transpose M*: transpose, then negate each imaginary part
    pub fn conjugate_transpose(&self) -> Self {
        let n = self.n;
        let mut data = vec![Complex::ZERO; n * n];
        for i in 0..n {
            for j in 0..n {
                data[j * n + i] = self.data[i * n + j].conj();
            }
        }
        Self { n, data }
    }

    /// Matrix product `self · other`.
    ///
    /// Fails with [`Error::ShapeMismatch`] when the operands differ in size.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.n != other.n {
            return Err(Error::ShapeMismatch {
                expected: vec![self.n, self.n],
                got: vec![other.n, other.n],
            });
        }
        let n = self.n;
        let mut data = vec![Complex::ZERO; n * n];
        matmul_kernel(&self.data, &other.data, &mut data, n);
        Ok(Self { n, data })
    }
}

/// Row-major square matmul: `out[i,j] = Σ_k a[i,k] * b[k,j]`.
///
/// Output rows are independent and computed in parallel.
#[cfg(feature = "rayon")]
fn matmul_kernel(a: &[Complex], b: &[Complex], out: &mut [Complex], n: usize) {
    use rayon::prelude::*;

    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(b.len(), n * n);

    out.par_chunks_mut(n).enumerate().for_each(|(i, out_row)| {
        let a_row = &a[i * n..(i + 1) * n];
        for (j, out_elem) in out_row.iter_mut().enumerate() {
            let mut acc = Complex::ZERO;
            for (k, &a_ik) in a_row.iter().enumerate() {
                acc = acc + a_ik * b[k * n + j];
            }
            *out_elem = acc;
        }
    });
}

/// Row-major square matmul: `out[i,j] = Σ_k a[i,k] * b[k,j]`.
#[cfg(not(feature = "rayon"))]
fn matmul_kernel(a: &[Complex], b: &[Complex], out: &mut [Complex], n: usize) {
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(b.len(), n * n);

    for (i, out_row) in out.chunks_mut(n).enumerate() {
        let a_row = &a[i * n..(i + 1) * n];
        for (j, out_elem) in out_row.iter_mut().enumerate() {
            let mut acc = Complex::ZERO;
            for (k, &a_ik) in a_row.iter().enumerate() {
                acc = acc + a_ik * b[k * n + j];
            }
            *out_elem = acc;
        }
    }
}
