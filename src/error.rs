//! Error types for the linear-algebra core and the decoder.
//!
//! A single tagged [`Error`] enum covers every failure mode raised by
//! [`crate::bitmatrix`], [`crate::generator`] and [`crate::ldpc`]. There is no
//! string-only error variant: every failure carries the data a caller needs to
//! report or recover from it.

use thiserror::Error as ThisError;

/// Errors raised by the GF(2) linear-algebra core and the LDPC decoder.
#[derive(Debug, Clone, Copy, PartialEq, ThisError)]
pub enum Error {
    /// A matrix constructor was given an empty or non-rectangular source.
    #[error("invalid matrix shape: expected {rows} rows of {cols} columns")]
    InvalidShape {
        /// Row count the caller claimed.
        rows: usize,
        /// Column count the caller claimed.
        cols: usize,
    },
    /// Two matrices could not be combined because their dimensions disagree.
    #[error("shape mismatch in {op}: left is {lhs_rows}x{lhs_cols}, right is {rhs_rows}x{rhs_cols}")]
    ShapeMismatch {
        /// Name of the operation that failed (`"mul"`, `"add"`, `"horiz_concat"`, ...).
        op: &'static str,
        /// Shape of the left-hand operand.
        lhs_rows: usize,
        /// Shape of the left-hand operand.
        lhs_cols: usize,
        /// Shape of the right-hand operand.
        rhs_rows: usize,
        /// Shape of the right-hand operand.
        rhs_cols: usize,
    },
    /// An element access fell outside of the matrix bounds.
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        /// Row index requested.
        row: usize,
        /// Column index requested.
        col: usize,
        /// Number of rows in the matrix.
        rows: usize,
        /// Number of columns in the matrix.
        cols: usize,
    },
    /// A column permutation was not a bijection on `0..c`.
    #[error("permutation of length {len} is not a valid permutation of 0..{len}")]
    InvalidPermutation {
        /// Length of the (invalid) permutation.
        len: usize,
    },
    /// A matrix inverse was requested of a singular matrix.
    #[error("matrix is not invertible over GF(2)")]
    Singular,
    /// The parity-check matrix's right block is singular, so no systematic
    /// generator matrix can be built from it.
    #[error(
        "parity check matrix is not systematic: the rightmost {parity_bits} columns are singular over GF(2)"
    )]
    NonSystematic {
        /// Number of parity bits (`m`), i.e. the width of the singular block.
        parity_bits: usize,
    },
    /// The BSC crossover probability was outside `(0, 0.5)`.
    #[error("invalid channel crossover probability {p}: must lie strictly between 0 and 0.5")]
    InvalidChannel {
        /// The rejected probability.
        p: f64,
    },
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
