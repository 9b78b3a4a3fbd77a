//! Property-based tests for the GF(2) linear-algebra invariants and decoder
//! determinism.

use ldpc_bp::{BitMatrix, Ldpc};
use proptest::prelude::*;

/// Builds an arbitrary `rows x cols` 0/1 matrix from a flat bit vector.
fn arbitrary_matrix(rows: usize, cols: usize) -> impl Strategy<Value = BitMatrix> {
    prop::collection::vec(0u8..=1, rows * cols).prop_map(move |bits| {
        BitMatrix::from_fn(rows, cols, |i, j| bits[i * cols + j])
    })
}

/// Builds an arbitrary invertible `n x n` matrix by taking the identity and
/// XORing in a handful of extra superdiagonal or subdiagonal 1-bits, which
/// keeps the matrix triangular (and hence invertible) regardless of which
/// bits are chosen.
fn arbitrary_invertible(n: usize) -> impl Strategy<Value = BitMatrix> {
    prop::collection::vec(any::<bool>(), n * (n - 1) / 2).prop_map(move |upper_bits| {
        let mut idx = 0;
        BitMatrix::from_fn(n, n, |i, j| {
            if i == j {
                1
            } else if i < j {
                let bit = upper_bits[idx];
                idx += 1;
                bit as u8
            } else {
                0
            }
        })
    })
}

proptest! {
    /// Property 1: transpose is an involution.
    #[test]
    fn transpose_is_involution(m in arbitrary_matrix(4, 5)) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    /// Property 2: `M * M^-1 == M^-1 * M == I` for invertible `M`.
    #[test]
    fn inverse_is_two_sided(m in arbitrary_invertible(5)) {
        let inv = m.inverse().unwrap();
        prop_assert_eq!(m.mul(&inv).unwrap(), BitMatrix::identity(5));
        prop_assert_eq!(inv.mul(&m).unwrap(), BitMatrix::identity(5));
    }

    /// Property 4: `horiz_concat` then `columns` recovers each operand.
    #[test]
    fn horiz_concat_then_columns_recovers_operands(
        a in arbitrary_matrix(3, 2),
        b in arbitrary_matrix(3, 4),
    ) {
        let joined = BitMatrix::horiz_concat(&[&a, &b]).unwrap();
        prop_assert_eq!(joined.columns(0, 2).unwrap(), a.clone());
        prop_assert_eq!(joined.columns(2, 6).unwrap(), b.clone());
    }

    /// Property 5: permuting by `pi` then by its inverse is the identity
    /// operation on columns.
    #[test]
    fn permute_columns_round_trips(m in arbitrary_matrix(3, 5), seed in 0u64..1000) {
        // Build a permutation of 0..5 deterministically from `seed` via a
        // Fisher-Yates-style shuffle over a small fixed-size array.
        let mut perm: Vec<usize> = (0..5).collect();
        let mut state = seed;
        for i in (1..perm.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let j = (state >> 33) as usize % (i + 1);
            perm.swap(i, j);
        }
        let mut inverse = vec![0usize; perm.len()];
        for (i, &p) in perm.iter().enumerate() {
            inverse[p] = i;
        }
        let permuted = m.permute_columns(&perm).unwrap();
        prop_assert_eq!(permuted.permute_columns(&inverse).unwrap(), m);
    }

    /// Property 7: encoding is systematic, the message reappears as the
    /// codeword's prefix.
    #[test]
    fn encode_is_systematic(bits in prop::collection::vec(0u8..=1, 3)) {
        let h = BitMatrix::horiz_concat(&[&BitMatrix::zero(3, 3), &BitMatrix::identity(3)]).unwrap();
        let code = Ldpc::new(h, 0.1, 10).unwrap();
        let u = BitMatrix::from_fn(1, 3, |_, j| bits[j]);
        let x = code.encode(&u).unwrap();
        prop_assert_eq!(x.columns(0, 3).unwrap(), u);
    }

    /// Property 10: decoding is a pure function of (H, G, p, T, y).
    #[test]
    fn decode_is_deterministic(bits in prop::collection::vec(0u8..=1, 12)) {
        let h = BitMatrix::from_rows(&[
            "011011101111",
            "110101000010",
            "000011110000",
            "011000100010",
            "111010111010",
            "101000010100",
        ]).unwrap();
        let code = Ldpc::new(h, 0.1, 20).unwrap();
        let y = BitMatrix::from_fn(1, 12, |_, j| bits[j]);
        let first = code.decode(&y).unwrap();
        let second = code.decode(&y).unwrap();
        prop_assert_eq!(first, second);
    }
}
