//! Stochastic graph generators.
//!
//! Each model is exposed twice: as a free function generic over any
//! [`rand::Rng`], and as a method on [`GraphGenerator`], which owns a seeded
//! [`SmallRng`] so repeated runs stay reproducible without a process-wide
//! random source.

mod barabasi_albert;
mod degree_sequence;
mod erdos_renyi;
mod hot_extended;
mod params;
mod pool;

use rand::{SeedableRng, rngs::SmallRng};

use crate::{error::Result, graph::Graph};

pub use self::{
    barabasi_albert::generate_barabasi_albert,
    degree_sequence::generate_degree_sequence,
    erdos_renyi::generate_erdos_renyi,
    hot_extended::generate_hot_extended,
    params::{
        BarabasiAlbertParams, DEFAULT_RETRY_BUDGET, DegreeSequence, ErdosRenyiParams,
        HotExtendedParams,
    },
};

/// Owns the random stream shared by consecutive generator runs.
///
/// # Examples
/// ```
/// use complexnets_core::{ErdosRenyiParams, GraphGenerator};
///
/// let params = ErdosRenyiParams::new(30, 0.2)?;
/// let first = GraphGenerator::seeded(7).erdos_renyi(&params)?;
/// let second = GraphGenerator::seeded(7).erdos_renyi(&params)?;
/// assert!(first.edges().eq(second.edges()));
/// # Ok::<(), complexnets_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphGenerator {
    rng: SmallRng,
}

impl GraphGenerator {
    /// Creates a generator whose output is a pure function of `seed` and the
    /// sequence of calls made on it.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Runs [`generate_erdos_renyi`] on the owned random stream.
    ///
    /// # Errors
    /// See [`generate_erdos_renyi`].
    pub fn erdos_renyi(&mut self, params: &ErdosRenyiParams) -> Result<Graph> {
        generate_erdos_renyi(params, &mut self.rng)
    }

    /// Runs [`generate_barabasi_albert`] on the owned random stream.
    ///
    /// # Errors
    /// See [`generate_barabasi_albert`].
    pub fn barabasi_albert(&mut self, params: &BarabasiAlbertParams) -> Result<Graph> {
        generate_barabasi_albert(params, &mut self.rng)
    }

    /// Runs [`generate_hot_extended`] on the owned random stream.
    ///
    /// # Errors
    /// See [`generate_hot_extended`].
    pub fn hot_extended(&mut self, params: &HotExtendedParams) -> Result<Graph> {
        generate_hot_extended(params, &mut self.rng)
    }

    /// Runs [`generate_degree_sequence`] on the owned random stream.
    ///
    /// # Errors
    /// See [`generate_degree_sequence`].
    pub fn degree_sequence(&mut self, sequence: &DegreeSequence) -> Result<Graph> {
        generate_degree_sequence(sequence, &mut self.rng)
    }
}
