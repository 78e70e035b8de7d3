//! # classr
//!
//! **Tolerance-aware classification of complex matrices.**
//!
//! classr answers one question: given a square matrix of complex numbers,
//! is it Hermitian, unitary, both, or neither? Floating-point input never
//! matches these definitions exactly, so every comparison runs under an
//! absolute/relative tolerance policy.
//!
//! ## What's included
//!
//! - **Complex literals**: a strict parser for tokens like `3+2j`, `-i`,
//!   `1e-3+0.5i`, including the shorthands an interactive front end sees
//! - **Matrices**: dense row-major square matrices of complex scalars with
//!   conjugate transpose and matrix product
//! - **Classification**: [`classify`](classify::classify) returns the labels
//!   that apply, in a fixed check order, under [`Tolerance`](classify::Tolerance)
//!
//! ## Quick Start
//!
//! ```
//! use classr::prelude::*;
//!
//! // Pauli-X: [[0, 1], [1, 0]]
//! let cells = ["0", "1", "1", "0"]
//!     .iter()
//!     .map(|t| parse_complex(t))
//!     .collect::<Result<Vec<_>>>()?;
//! let m = Matrix::from_vec(2, cells)?;
//!
//! let kinds = classify(&m, Tolerance::default());
//! assert_eq!(kinds, vec![MatrixKind::Hermitian, MatrixKind::Unitary]);
//! # Ok::<(), classr::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): parallel matrix product across output rows
//! - `cli`: the `classr` command-line front end

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod complex;
pub mod error;
pub mod matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::classify::{classify, is_hermitian, is_unitary, MatrixKind, Tolerance};
    pub use crate::complex::{parse_complex, Complex};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
}
