//! Systematic encoding.

use crate::bitmatrix::BitMatrix;
use crate::error::Result;

/// Encodes message row-vector `u` (length `k`) against generator matrix `g`
/// (shape `(k, n)`), returning the codeword `u · g` (length `n`).
pub fn encode(g: &BitMatrix, u: &BitMatrix) -> Result<BitMatrix> {
    u.mul(g)
}
