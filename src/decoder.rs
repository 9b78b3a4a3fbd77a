//! Sum-product (belief-propagation) decoding over a Tanner graph.
//!
//! The decoder treats the channel as a binary-symmetric channel (BSC) with a
//! single crossover probability `p`. Each received hard bit is turned into a
//! log-likelihood ratio (LLR); check nodes and variable nodes then exchange
//! LLR-valued messages along the Tanner graph's edges using the tanh/atanh
//! form of the sum-product update, until the current hard estimate's
//! syndrome is zero or an iteration cap is reached.

use crate::bitmatrix::BitMatrix;
use crate::error::{Error, Result};
use crate::tanner::TannerGraph;
use ndarray::Array2;

/// Margin kept away from `+-1` before taking `atanh`, so that a unanimous
/// check-node product (`+-1` exactly) never produces an infinite or NaN
/// message. `f64::atanh` is finite for any argument with
/// `|x| <= 1.0 - CLAMP_EPSILON`, and this margin is far smaller than the gap
/// between LLRs seen in practice, so it never perturbs a hard decision.
const CLAMP_EPSILON: f64 = 1e-10;

/// Converts a received hard bit into its initial LLR under a BSC with
/// crossover probability `p`: `log((1 - p - y) / (p - y))`. Positive values
/// favor `0`; negative values favor `1`.
fn channel_llr(p: f64, y: u8) -> f64 {
    let y = f64::from(y);
    ((1.0 - p - y) / (p - y)).ln()
}

/// `1` if `llr < 0`, else `0`. Ties (`llr == 0.0`) favor `0`.
fn hard_decision(llr: f64) -> u8 {
    u8::from(llr < 0.0)
}

fn clamped_atanh(x: f64) -> f64 {
    x.clamp(-(1.0 - CLAMP_EPSILON), 1.0 - CLAMP_EPSILON).atanh()
}

fn estimate_matrix(bits: &[u8]) -> BitMatrix {
    BitMatrix::from_fn(1, bits.len(), |_, j| bits[j])
}

fn syndrome(h: &BitMatrix, estimate: &BitMatrix) -> Result<BitMatrix> {
    estimate.mul(&h.transpose())
}

/// Per-iteration observer, invoked after each DECIDE transition (including
/// the initial hard decision at iteration `0`) with the iteration index, the
/// current hard estimate, and the current posterior LLRs. Observers must not
/// mutate decoder state and must return promptly.
pub type Observer<'a> = dyn FnMut(usize, &BitMatrix, &[f64]) + 'a;

/// Runs the sum-product decoder for received word `y` against parity-check
/// matrix `h` and its Tanner graph, under a BSC with crossover probability
/// `p`, for at most `max_iter` iterations.
///
/// `p` must lie strictly between `0` and `0.5`, otherwise returns
/// [`Error::InvalidChannel`]. `y` must be a row vector of length
/// `h.cols()`.
pub fn decode(
    h: &BitMatrix,
    tanner: &TannerGraph,
    p: f64,
    max_iter: usize,
    y: &BitMatrix,
    mut observer: Option<&mut Observer<'_>>,
) -> Result<BitMatrix> {
    if !(p > 0.0 && p < 0.5) {
        return Err(Error::InvalidChannel { p });
    }
    let m = h.rows();
    let n = h.cols();
    if y.rows() != 1 || y.cols() != n {
        return Err(Error::ShapeMismatch {
            op: "decode",
            lhs_rows: 1,
            lhs_cols: n,
            rhs_rows: y.rows(),
            rhs_cols: y.cols(),
        });
    }

    let llr: Vec<f64> = (0..n).map(|j| channel_llr(p, y.get(0, j).expect("in range"))).collect();

    let mut to_check = Array2::<f64>::zeros((m, n));
    for i in 0..m {
        for &j in tanner.check_neighbors(i) {
            to_check[[i, j]] = llr[j];
        }
    }
    let mut from_check = Array2::<f64>::zeros((m, n));

    let mut bits: Vec<u8> = llr.iter().map(|&l| hard_decision(l)).collect();
    let mut estimate = estimate_matrix(&bits);
    let mut s = syndrome(h, &estimate)?;
    let zero_syndrome = BitMatrix::zero(1, m);

    if let Some(obs) = observer.as_deref_mut() {
        obs(0, &estimate, &llr);
    }

    let mut iter = 0;
    while s != zero_syndrome && iter < max_iter {
        // Check-node update: from_check[i][j] = 2 atanh(prod_{k != j} tanh(to_check[i][k] / 2)).
        for i in 0..m {
            let neighbors = tanner.check_neighbors(i);
            let tanhs: Vec<f64> = neighbors.iter().map(|&k| (0.5 * to_check[[i, k]]).tanh()).collect();
            for (idx, &j) in neighbors.iter().enumerate() {
                let product: f64 = tanhs
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != idx)
                    .map(|(_, &t)| t)
                    .product();
                from_check[[i, j]] = 2.0 * clamped_atanh(product);
            }
        }

        // Variable-node update: to_check[i][j] = L[j] + sum_{k != i} from_check[k][j].
        let mut posterior = vec![0.0; n];
        for j in 0..n {
            let neighbors = tanner.var_neighbors(j);
            let total: f64 = neighbors.iter().map(|&i| from_check[[i, j]]).sum();
            for &i in neighbors {
                to_check[[i, j]] = llr[j] + (total - from_check[[i, j]]);
            }
            posterior[j] = llr[j] + total;
        }

        bits = posterior.iter().map(|&l| hard_decision(l)).collect();
        estimate = estimate_matrix(&bits);
        s = syndrome(h, &estimate)?;
        iter += 1;

        log::trace!("decode iteration {iter}: syndrome weight {}", weight(&s));
        if let Some(obs) = observer.as_deref_mut() {
            obs(iter, &estimate, &posterior);
        }
    }

    if s == zero_syndrome {
        log::debug!("decode converged after {iter} iterations");
    } else {
        log::debug!("decode stopped at iteration cap {iter} without zero syndrome");
    }
    Ok(estimate)
}

fn weight(m: &BitMatrix) -> usize {
    (0..m.cols()).map(|j| m.get(0, j).unwrap_or(0) as usize).sum()
}
