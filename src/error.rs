//! Error types for classr

use thiserror::Error;

/// Result type alias using classr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in classr operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A token could not be interpreted as a complex-number literal
    #[error("invalid complex literal: '{token}'")]
    InvalidComplex {
        /// The offending token, after whitespace trimming
        token: String,
    },

    /// Matrix dimensions do not form the expected square shape
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape as `[rows, cols]`
        expected: Vec<usize>,
        /// Actual shape as `[rows, cols]`
        got: Vec<usize>,
    },
}
