//! Systematic generator-matrix construction.
//!
//! Given a parity-check matrix `H = [A | B]` of shape `(m, n)`, split at
//! column `k = n - m`, the systematic generator is
//! `G = [I_k | Aᵀ · (Bᵀ)⁻¹]`.
//!
//! Rather than inverting `B` and then transposing, this runs the paired
//! Gauss-Jordan engine directly on the pair `(B, A)`: reducing `B` to the
//! identity while mirroring every row operation onto `A` leaves `A` holding
//! `B⁻¹ · A`, and `(B⁻¹ · A)ᵀ = Aᵀ · (B⁻¹)ᵀ = Aᵀ · (Bᵀ)⁻¹`, exactly the block
//! the generator needs. This reuses [`gauss::reduce_pair`] for both matrix
//! inversion ([`crate::bitmatrix::BitMatrix::inverse`]) and generator
//! construction without a separate transpose-then-invert step.

use crate::bitmatrix::BitMatrix;
use crate::error::{Error, Result};
use crate::gauss;

/// Builds the systematic generator matrix for parity-check matrix `h`.
///
/// `h` must have shape `(m, n)` with `n > m`; its rightmost `m` columns must
/// be invertible over GF(2), otherwise this returns [`Error::NonSystematic`].
pub fn generator_of(h: &BitMatrix) -> Result<BitMatrix> {
    let m = h.rows();
    let n = h.cols();
    if n <= m {
        return Err(Error::InvalidShape { rows: m, cols: n });
    }
    let k = n - m;

    let a = h.columns(0, k)?;
    let b = h.columns(k, n)?;

    log::debug!("building systematic generator: m={m} n={n} k={k}");

    // Reduce the parity block B to the identity, mirroring every row
    // operation onto the information block A. A then holds B^-1 * A, whose
    // transpose is A^T * (B^-1)^T = A^T * (B^T)^-1, the block the generator
    // needs.
    let mut parity_block = b.to_array();
    let mut info_block = a.to_array();
    if !gauss::reduce_pair(&mut parity_block, &mut info_block) {
        log::warn!("parity check matrix is not systematic: right {m} columns are singular");
        return Err(Error::NonSystematic { parity_bits: m });
    }

    let p = BitMatrix::from_array(info_block).transpose();
    BitMatrix::horiz_concat(&[&BitMatrix::identity(k), &p])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identity_parity_structure() {
        // H = [zero(3,3) | identity(3)]; generator should be [identity(3) | zero(3,3)].
        let zero = BitMatrix::zero(3, 3);
        let id = BitMatrix::identity(3);
        let h = BitMatrix::horiz_concat(&[&zero, &id]).unwrap();
        let g = generator_of(&h).unwrap();
        let expected = BitMatrix::horiz_concat(&[&id, &zero]).unwrap();
        assert_eq!(g, expected);
    }

    #[test]
    fn generator_satisfies_parity_relation() {
        let h = BitMatrix::from_rows(&[
            "011011101111",
            "110101000010",
            "000011110000",
            "011000100010",
            "111010111010",
            "101000010100",
        ])
        .unwrap();
        let g = generator_of(&h).unwrap();
        assert_eq!(g.rows(), 6);
        assert_eq!(g.cols(), 12);
        let product = g.mul(&h.transpose()).unwrap();
        assert_eq!(product, BitMatrix::zero(6, 6));
    }

    #[test]
    fn singular_right_block_is_non_systematic() {
        // Right block is all-zero columns, definitely singular.
        let h = BitMatrix::from_rows(&["1000", "0100"]).unwrap();
        assert_eq!(
            generator_of(&h).unwrap_err(),
            Error::NonSystematic { parity_bits: 2 }
        );
    }

    #[test]
    fn rejects_non_overdetermined_shape() {
        let h = BitMatrix::identity(3);
        assert!(matches!(generator_of(&h).unwrap_err(), Error::InvalidShape { .. }));
    }
}
