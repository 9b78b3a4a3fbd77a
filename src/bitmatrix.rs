//! Dense binary matrices over GF(2).
//!
//! [`BitMatrix`] is a value-semantic dense matrix: every operation below
//! returns a freshly allocated matrix rather than mutating its operands in
//! place. Internally it is backed by an `ndarray::Array2<GF2>`, the same
//! representation the generator and encoder build on top of.

use crate::error::{Error, Result};
use crate::gauss;
use crate::gf2::GF2;
use ndarray::{concatenate, Array2, Axis};
use num_traits::Zero;
use std::hash::{Hash, Hasher};

/// A dense binary matrix of shape `(rows, cols)`.
#[derive(Debug, Clone)]
pub struct BitMatrix {
    data: Array2<GF2>,
}

impl BitMatrix {
    /// Builds a matrix from a rectangular `0`/`1` source.
    ///
    /// `rows` must be non-empty and every row must have length `cols`;
    /// otherwise returns [`Error::InvalidShape`].
    pub fn new(rows: usize, cols: usize, data: &[Vec<u8>]) -> Result<BitMatrix> {
        if rows == 0 || cols == 0 || data.len() != rows || data.iter().any(|r| r.len() != cols) {
            return Err(Error::InvalidShape { rows, cols });
        }
        let mut array = Array2::from_elem((rows, cols), GF2::zero());
        for (i, row) in data.iter().enumerate() {
            for (j, &bit) in row.iter().enumerate() {
                array[[i, j]] = GF2::from(bit);
            }
        }
        Ok(BitMatrix { data: array })
    }

    /// Builds a matrix from rows given as bit strings such as `"1011"`.
    ///
    /// Any byte other than the ASCII digit `'0'` is treated as `1`, matching
    /// the literal matrices used throughout this crate's tests.
    pub fn from_rows(rows: &[&str]) -> Result<BitMatrix> {
        if rows.is_empty() {
            return Err(Error::InvalidShape { rows: 0, cols: 0 });
        }
        let cols = rows[0].len();
        let data: Vec<Vec<u8>> = rows
            .iter()
            .map(|r| r.bytes().map(|b| (b != b'0') as u8).collect())
            .collect();
        BitMatrix::new(rows.len(), cols, &data)
    }

    /// The `n`-by-`n` identity matrix.
    pub fn identity(n: usize) -> BitMatrix {
        BitMatrix {
            data: Array2::from_shape_fn((n, n), |(i, j)| GF2::from(i == j)),
        }
    }

    /// The all-zero matrix of shape `(rows, cols)`.
    pub fn zero(rows: usize, cols: usize) -> BitMatrix {
        BitMatrix {
            data: Array2::from_elem((rows, cols), GF2::zero()),
        }
    }

    /// Builds a matrix of shape `(rows, cols)` where element `(i, j)` is
    /// `f(i, j) != 0`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> u8) -> BitMatrix {
        BitMatrix {
            data: Array2::from_shape_fn((rows, cols), |(i, j)| GF2::from(f(i, j))),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Bounds-checked element access.
    pub fn get(&self, row: usize, col: usize) -> Result<u8> {
        self.data
            .get((row, col))
            .map(|&x| x.bit())
            .ok_or(Error::IndexOutOfRange {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Returns the transpose, of shape `(cols, rows)`.
    pub fn transpose(&self) -> BitMatrix {
        BitMatrix {
            data: self.data.t().to_owned(),
        }
    }

    /// Returns the column slice `[start, end)`, of shape `(rows, end - start)`.
    pub fn columns(&self, start: usize, end: usize) -> Result<BitMatrix> {
        if start > end || end > self.cols() {
            return Err(Error::IndexOutOfRange {
                row: 0,
                col: end,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(BitMatrix {
            data: self.data.slice(ndarray::s![.., start..end]).to_owned(),
        })
    }

    /// Returns a copy of this matrix with columns reordered by `perm`:
    /// result column `j` is `self` column `perm[j]`.
    ///
    /// `perm` must be a permutation of `0..self.cols()`, otherwise returns
    /// [`Error::InvalidPermutation`].
    pub fn permute_columns(&self, perm: &[usize]) -> Result<BitMatrix> {
        let c = self.cols();
        if perm.len() != c || !is_permutation(perm, c) {
            return Err(Error::InvalidPermutation { len: perm.len() });
        }
        let data = Array2::from_shape_fn((self.rows(), c), |(i, j)| self.data[[i, perm[j]]]);
        Ok(BitMatrix { data })
    }

    /// Concatenates matrices side by side. All operands must share the same
    /// row count, otherwise returns [`Error::ShapeMismatch`].
    pub fn horiz_concat(mats: &[&BitMatrix]) -> Result<BitMatrix> {
        let first = mats.first().ok_or(Error::InvalidShape { rows: 0, cols: 0 })?;
        let rows = first.rows();
        for m in mats {
            if m.rows() != rows {
                return Err(Error::ShapeMismatch {
                    op: "horiz_concat",
                    lhs_rows: rows,
                    lhs_cols: first.cols(),
                    rhs_rows: m.rows(),
                    rhs_cols: m.cols(),
                });
            }
        }
        let views: Vec<_> = mats.iter().map(|m| m.data.view()).collect();
        let data = concatenate(Axis(1), &views).expect("row counts checked above");
        Ok(BitMatrix { data })
    }

    /// Concatenates matrices one atop another. All operands must share the
    /// same column count, otherwise returns [`Error::ShapeMismatch`].
    pub fn vert_concat(mats: &[&BitMatrix]) -> Result<BitMatrix> {
        let first = mats.first().ok_or(Error::InvalidShape { rows: 0, cols: 0 })?;
        let cols = first.cols();
        for m in mats {
            if m.cols() != cols {
                return Err(Error::ShapeMismatch {
                    op: "vert_concat",
                    lhs_rows: first.rows(),
                    lhs_cols: cols,
                    rhs_rows: m.rows(),
                    rhs_cols: m.cols(),
                });
            }
        }
        let views: Vec<_> = mats.iter().map(|m| m.data.view()).collect();
        let data = concatenate(Axis(0), &views).expect("col counts checked above");
        Ok(BitMatrix { data })
    }

    /// Matrix product modulo 2. Requires `self.cols() == rhs.rows()`.
    pub fn mul(&self, rhs: &BitMatrix) -> Result<BitMatrix> {
        if self.cols() != rhs.rows() {
            return Err(Error::ShapeMismatch {
                op: "mul",
                lhs_rows: self.rows(),
                lhs_cols: self.cols(),
                rhs_rows: rhs.rows(),
                rhs_cols: rhs.cols(),
            });
        }
        Ok(BitMatrix {
            data: self.data.dot(&rhs.data),
        })
    }

    /// Elementwise XOR. Requires equal shape.
    pub fn add(&self, rhs: &BitMatrix) -> Result<BitMatrix> {
        if self.rows() != rhs.rows() || self.cols() != rhs.cols() {
            return Err(Error::ShapeMismatch {
                op: "add",
                lhs_rows: self.rows(),
                lhs_cols: self.cols(),
                rhs_rows: rhs.rows(),
                rhs_cols: rhs.cols(),
            });
        }
        Ok(BitMatrix {
            data: &self.data + &rhs.data,
        })
    }

    /// Number of 1-bits in row `row`.
    pub fn row_weight(&self, row: usize) -> Result<usize> {
        if row >= self.rows() {
            return Err(Error::IndexOutOfRange {
                row,
                col: 0,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.data.row(row).iter().map(|&x| x.bit() as usize).sum())
    }

    /// Number of 1-bits in column `col`.
    pub fn col_weight(&self, col: usize) -> Result<usize> {
        if col >= self.cols() {
            return Err(Error::IndexOutOfRange {
                row: 0,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.data.column(col).iter().map(|&x| x.bit() as usize).sum())
    }

    /// True iff the matrix is square and Gauss-Jordan elimination reduces it
    /// to the identity. Does not mutate `self`.
    pub fn is_invertible(&self) -> bool {
        if self.rows() != self.cols() {
            return false;
        }
        let mut a = self.data.clone();
        let mut scratch = Array2::from_elem((self.rows(), self.rows()), GF2::zero());
        gauss::reduce_pair(&mut a, &mut scratch)
    }

    /// Wraps a raw `ndarray` backing store. Used internally by modules that
    /// run the Gauss-Jordan engine directly on matrix blocks.
    pub(crate) fn from_array(data: Array2<GF2>) -> BitMatrix {
        BitMatrix { data }
    }

    /// Clones the raw `ndarray` backing store. Used internally by modules
    /// that run the Gauss-Jordan engine directly on matrix blocks.
    pub(crate) fn to_array(&self) -> Array2<GF2> {
        self.data.clone()
    }

    /// Returns the inverse over GF(2), or [`Error::Singular`] if the matrix
    /// is singular (including non-square matrices).
    pub fn inverse(&self) -> Result<BitMatrix> {
        if self.rows() != self.cols() {
            log::warn!(
                "cannot invert a non-square {}x{} matrix",
                self.rows(),
                self.cols()
            );
            return Err(Error::Singular);
        }
        let n = self.rows();
        let mut a = self.data.clone();
        let mut b = BitMatrix::identity(n).data;
        if !gauss::reduce_pair(&mut a, &mut b) {
            log::warn!("matrix is singular over GF(2), no inverse exists");
            return Err(Error::Singular);
        }
        Ok(BitMatrix { data: b })
    }
}

fn is_permutation(perm: &[usize], n: usize) -> bool {
    let mut seen = vec![false; n];
    for &p in perm {
        if p >= n || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}

impl PartialEq for BitMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for BitMatrix {}

impl Hash for BitMatrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows().hash(state);
        self.cols().hash(state);
        for x in self.data.iter() {
            x.bit().hash(state);
        }
    }
}
