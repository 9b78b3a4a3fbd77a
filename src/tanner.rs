//! Tanner graph adjacency for a parity-check matrix.
//!
//! The Tanner graph of an `(m, n)` parity-check matrix `H` is a bipartite
//! graph with one check node per row and one variable node per column, edges
//! at the nonzero entries of `H`. It is represented here as two index
//! arrays, `row_adj` and `col_adj`, rather than linked nodes: an edge is
//! implicit in the pair of lists and owns no storage of its own.

use crate::bitmatrix::BitMatrix;

/// Bipartite adjacency of a parity-check matrix's Tanner graph.
#[derive(Debug, Clone)]
pub struct TannerGraph {
    /// `row_adj[i]` lists, in ascending order, the column indices `j` with
    /// `H[i, j] = 1`.
    row_adj: Vec<Vec<usize>>,
    /// `col_adj[j]` lists, in ascending order, the row indices `i` with
    /// `H[i, j] = 1`.
    col_adj: Vec<Vec<usize>>,
}

impl TannerGraph {
    /// Builds the Tanner graph of `h` in a single row-major scan.
    pub fn build(h: &BitMatrix) -> TannerGraph {
        let m = h.rows();
        let n = h.cols();
        let mut row_adj = vec![Vec::new(); m];
        let mut col_adj = vec![Vec::new(); n];
        for i in 0..m {
            for j in 0..n {
                if h.get(i, j).expect("indices within bounds") != 0 {
                    row_adj[i].push(j);
                    col_adj[j].push(i);
                }
            }
        }
        log::trace!(
            "built tanner graph: {m} check nodes, {n} variable nodes, {} edges",
            row_adj.iter().map(Vec::len).sum::<usize>()
        );
        TannerGraph { row_adj, col_adj }
    }

    /// Number of check (row) nodes.
    pub fn num_checks(&self) -> usize {
        self.row_adj.len()
    }

    /// Number of variable (column) nodes.
    pub fn num_vars(&self) -> usize {
        self.col_adj.len()
    }

    /// Variable nodes adjacent to check node `i`, in ascending order.
    pub fn check_neighbors(&self, i: usize) -> &[usize] {
        &self.row_adj[i]
    }

    /// Check nodes adjacent to variable node `j`, in ascending order.
    pub fn var_neighbors(&self, j: usize) -> &[usize] {
        &self.col_adj[j]
    }
}
