//! Public facade combining the generator, parity-check matrix, Tanner graph
//! and decoder configuration into a single code instance.

use crate::bitmatrix::BitMatrix;
use crate::decoder::{self, Observer};
use crate::encoder;
use crate::error::{Error, Result};
use crate::generator;
use crate::tanner::TannerGraph;

/// An LDPC code: a parity-check matrix, its systematic generator, the
/// Tanner graph built from the parity-check matrix, and the belief
/// propagation decoder's configuration.
#[derive(Debug, Clone)]
pub struct Ldpc {
    generator: BitMatrix,
    parity_check: BitMatrix,
    tanner: TannerGraph,
    bitflip_chance: f64,
    max_iterations: usize,
}

fn check_channel(p: f64) -> Result<()> {
    if p > 0.0 && p < 0.5 {
        Ok(())
    } else {
        Err(Error::InvalidChannel { p })
    }
}

impl Ldpc {
    /// Builds a code from parity-check matrix `h`, deriving its systematic
    /// generator matrix. Fails with [`Error::NonSystematic`] if `h`'s
    /// rightmost columns are singular, or [`Error::InvalidChannel`] if `p`
    /// is not strictly between `0` and `0.5`.
    pub fn new(h: BitMatrix, p: f64, max_iterations: usize) -> Result<Ldpc> {
        check_channel(p)?;
        let generator = generator::generator_of(&h)?;
        let tanner = TannerGraph::build(&h);
        log::debug!(
            "constructed ldpc code: m={} n={} k={} p={p} max_iterations={max_iterations}",
            h.rows(),
            h.cols(),
            generator.rows(),
        );
        Ok(Ldpc {
            generator,
            parity_check: h,
            tanner,
            bitflip_chance: p,
            max_iterations,
        })
    }

    /// Builds a code from a caller-supplied generator matrix `g` and
    /// parity-check matrix `h`, skipping generator derivation. The caller is
    /// responsible for `g · hᵀ = 0`.
    pub fn with_generator(g: BitMatrix, h: BitMatrix, p: f64, max_iterations: usize) -> Result<Ldpc> {
        check_channel(p)?;
        let tanner = TannerGraph::build(&h);
        log::debug!(
            "constructed ldpc code from caller-supplied generator: m={} n={} k={} p={p} max_iterations={max_iterations}",
            h.rows(),
            h.cols(),
            g.rows(),
        );
        Ok(Ldpc {
            generator: g,
            parity_check: h,
            tanner,
            bitflip_chance: p,
            max_iterations,
        })
    }

    /// Encodes message row-vector `u` (length [`Ldpc::message_bits`]) into a
    /// codeword (length [`Ldpc::encoded_bits`]).
    pub fn encode(&self, u: &BitMatrix) -> Result<BitMatrix> {
        encoder::encode(&self.generator, u)
    }

    /// Decodes received hard bits `y` (length [`Ldpc::encoded_bits`]) by
    /// sum-product belief propagation.
    pub fn decode(&self, y: &BitMatrix) -> Result<BitMatrix> {
        decoder::decode(&self.parity_check, &self.tanner, self.bitflip_chance, self.max_iterations, y, None)
    }

    /// Decodes as [`Ldpc::decode`], additionally invoking `observer` after
    /// every DECIDE transition (including the initial hard decision) with
    /// the iteration index, the current hard estimate, and the current
    /// posterior LLRs.
    pub fn decode_with_observer(&self, y: &BitMatrix, observer: &mut Observer<'_>) -> Result<BitMatrix> {
        decoder::decode(
            &self.parity_check,
            &self.tanner,
            self.bitflip_chance,
            self.max_iterations,
            y,
            Some(observer),
        )
    }

    /// Updates the BSC crossover probability. Fails with
    /// [`Error::InvalidChannel`] if `p` is not strictly between `0` and
    /// `0.5`.
    pub fn set_bitflip_chance(&mut self, p: f64) -> Result<()> {
        check_channel(p)?;
        self.bitflip_chance = p;
        Ok(())
    }

    /// Updates the decoder's iteration cap.
    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.max_iterations = max_iterations;
    }

    /// The systematic generator matrix, shape `(k, n)`.
    pub fn generator(&self) -> &BitMatrix {
        &self.generator
    }

    /// The parity-check matrix, shape `(m, n)`.
    pub fn parity_check(&self) -> &BitMatrix {
        &self.parity_check
    }

    /// Message length `k`.
    pub fn message_bits(&self) -> usize {
        self.generator.rows()
    }

    /// Codeword length `n`.
    pub fn encoded_bits(&self) -> usize {
        self.generator.cols()
    }

    /// Number of parity checks `m`.
    pub fn parity_bits(&self) -> usize {
        self.parity_check.rows()
    }
}
