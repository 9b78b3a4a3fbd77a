//! Paired Gauss-Jordan elimination over GF(2).
//!
//! A single routine, [`reduce_pair`], drives every place this crate needs
//! Gauss-Jordan elimination: [`crate::bitmatrix::BitMatrix::inverse`] pairs the
//! matrix being inverted with an identity matrix, and
//! [`crate::generator::generator_of`] pairs the parity-check matrix's right
//! block with its left block. In both cases the left operand is reduced to the
//! identity while every row operation performed to do so is mirrored onto the
//! right operand, so that the right operand ends up holding (left operand)⁻¹
//! times whatever it started as.

use crate::gf2::GF2;
use ndarray::Array2;
use num_traits::Zero;

/// Reduces square matrix `a` to the identity in place via Gauss-Jordan
/// elimination, mirroring every row operation onto `b`. Returns `true` if `a`
/// was invertible (and has been reduced to the identity, with `b` now holding
/// the product of the eliminating row operations applied to its original
/// contents), or `false` if `a` is singular (in which case the contents of
/// both `a` and `b` are left in a partially reduced, unspecified state).
///
/// `a` must be square; `b` must have the same number of rows as `a`.
pub fn reduce_pair(a: &mut Array2<GF2>, b: &mut Array2<GF2>) -> bool {
    let n = a.nrows();
    assert_eq!(a.ncols(), n, "gauss-jordan reduction requires a square matrix");
    assert_eq!(b.nrows(), n, "paired matrix must have the same row count");

    for pivot in 0..n {
        // Pivot selection: among rows pivot..n, the one sorting greatest in
        // descending lexicographic order of its bit string is moved to
        // position `pivot`. A row whose leftmost 1 appears earliest sorts
        // greatest, so this brings a row with a 1 in column `pivot` to the
        // pivot position whenever one exists in the remaining submatrix.
        let best = (pivot..n)
            .max_by_key(|&row| row_bits(a, row))
            .expect("pivot..n is non-empty");
        if best != pivot {
            swap_rows(a, pivot, best);
            swap_rows(b, pivot, best);
        }
        if a[[pivot, pivot]].is_zero() {
            return false;
        }
        for row in (0..n).filter(|&row| row != pivot) {
            if !a[[row, pivot]].is_zero() {
                xor_row_into(a, pivot, row);
                xor_row_into(b, pivot, row);
            }
        }
    }
    true
}

/// Extracts row `row` of `m` as a bit vector suitable for lexicographic
/// comparison (descending, since `1 > 0`).
fn row_bits(m: &Array2<GF2>, row: usize) -> Vec<u8> {
    m.row(row).iter().map(|&x| u8::from(x)).collect()
}

fn swap_rows(m: &mut Array2<GF2>, i: usize, j: usize) {
    if i == j {
        return;
    }
    for col in 0..m.ncols() {
        m.swap([i, col], [j, col]);
    }
}

/// `target_row += source_row` (mod 2), in place.
fn xor_row_into(m: &mut Array2<GF2>, source: usize, target: usize) {
    let source_row: Vec<GF2> = m.row(source).to_vec();
    let mut target_row = m.row_mut(target);
    for (t, s) in target_row.iter_mut().zip(source_row) {
        *t += s;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn mat(rows: &[&[u8]]) -> Array2<GF2> {
        let r = rows.len();
        let c = rows[0].len();
        Array2::from_shape_fn((r, c), |(i, j)| GF2::from(rows[i][j]))
    }

    #[test]
    fn inverts_identity() {
        let mut a = mat(&[&[1, 0], &[0, 1]]);
        let mut b = mat(&[&[1, 0], &[0, 1]]);
        assert!(reduce_pair(&mut a, &mut b));
        assert_eq!(a, mat(&[&[1, 0], &[0, 1]]));
        assert_eq!(b, mat(&[&[1, 0], &[0, 1]]));
    }

    #[test]
    fn inverts_swap_matrix() {
        // [[0,1],[1,0]] is its own inverse.
        let mut a = mat(&[&[0, 1], &[1, 0]]);
        let mut b = mat(&[&[1, 0], &[0, 1]]);
        assert!(reduce_pair(&mut a, &mut b));
        assert_eq!(b, mat(&[&[0, 1], &[1, 0]]));
    }

    #[test]
    fn detects_singular() {
        let mut a = mat(&[&[1, 1], &[1, 1]]);
        let mut b = mat(&[&[1, 0], &[0, 1]]);
        assert!(!reduce_pair(&mut a, &mut b));
    }

    #[test]
    fn inverts_3x3() {
        // A small invertible matrix with a non-trivial elimination pattern.
        let mut a = mat(&[&[1, 1, 0], &[0, 1, 0], &[0, 1, 1]]);
        let orig = a.clone();
        let mut b = mat(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]);
        assert!(reduce_pair(&mut a, &mut b));
        assert_eq!(a, mat(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]));
        // b now holds orig^-1; check orig * b == I.
        let mut product = Array2::from_elem((3, 3), GF2::zero());
        for i in 0..3 {
            for j in 0..3 {
                let mut acc = GF2::zero();
                for k in 0..3 {
                    acc += orig[[i, k]] * b[[k, j]];
                }
                product[[i, j]] = acc;
            }
        }
        assert_eq!(product, mat(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]));
    }
}
