//! Validated parameter sets for the graph generators.
//!
//! Every constructor checks its preconditions eagerly so that a generator
//! never starts work it cannot finish.

use crate::error::{GeneratorError, Result};

/// Default number of consecutive rejected draws tolerated while attaching a
/// single Barabási–Albert vertex.
pub const DEFAULT_RETRY_BUDGET: usize = 10_000;

/// Parameters for the Erdős–Rényi `G(n, p)` generator.
///
/// # Examples
/// ```
/// use complexnets_core::ErdosRenyiParams;
///
/// let params = ErdosRenyiParams::new(100, 0.05).expect("parameters must be valid");
/// assert_eq!(params.vertices(), 100);
/// assert!(ErdosRenyiParams::new(10, 1.5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErdosRenyiParams {
    vertices: usize,
    probability: f64,
}

impl ErdosRenyiParams {
    /// Creates a parameter set for `vertices` vertices and per-pair edge
    /// probability `probability`.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameters`] when `probability` is not
    /// a finite value in `[0, 1]`.
    pub fn new(vertices: usize, probability: f64) -> Result<Self> {
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(GeneratorError::invalid(format!(
                "probability ({probability}) must lie in [0, 1]"
            )));
        }
        Ok(Self {
            vertices,
            probability,
        })
    }

    /// Returns the number of vertices created before pruning.
    #[must_use]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the per-pair edge probability.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

/// Parameters for the Barabási–Albert preferential-attachment generator.
///
/// # Examples
/// ```
/// use complexnets_core::BarabasiAlbertParams;
///
/// let params = BarabasiAlbertParams::new(3, 2, 50)
///     .expect("parameters must be valid")
///     .with_retry_budget(500);
/// assert_eq!(params.edges_per_vertex(), 2);
/// assert_eq!(params.retry_budget(), 500);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarabasiAlbertParams {
    seed_vertices: usize,
    edges_per_vertex: usize,
    vertices: usize,
    retry_budget: usize,
}

impl BarabasiAlbertParams {
    /// Creates a parameter set growing a complete seed of `seed_vertices`
    /// (`m0`) vertices to `vertices` (`n`) vertices, linking each newcomer to
    /// `edges_per_vertex` (`m`) existing vertices.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameters`] when `m` is zero, when
    /// `m` exceeds `m0` (the first newcomer could never find `m` partners), or
    /// when `n` is smaller than `m0`.
    pub fn new(seed_vertices: usize, edges_per_vertex: usize, vertices: usize) -> Result<Self> {
        if edges_per_vertex == 0 {
            return Err(GeneratorError::invalid(
                "edges_per_vertex must be greater than zero",
            ));
        }
        if edges_per_vertex > seed_vertices {
            return Err(GeneratorError::invalid(format!(
                "edges_per_vertex ({edges_per_vertex}) must be <= seed_vertices ({seed_vertices})"
            )));
        }
        if vertices < seed_vertices {
            return Err(GeneratorError::invalid(format!(
                "vertices ({vertices}) must be >= seed_vertices ({seed_vertices})"
            )));
        }
        Ok(Self {
            seed_vertices,
            edges_per_vertex,
            vertices,
            retry_budget: DEFAULT_RETRY_BUDGET,
        })
    }

    /// Overrides how many consecutive rejected draws are tolerated before the
    /// generator gives up on a vertex. Zero is raised to one.
    #[must_use]
    pub fn with_retry_budget(mut self, retry_budget: usize) -> Self {
        self.retry_budget = retry_budget.max(1);
        self
    }

    /// Returns the size of the complete seed graph (`m0`).
    #[must_use]
    pub fn seed_vertices(&self) -> usize {
        self.seed_vertices
    }

    /// Returns the number of links made by each new vertex (`m`).
    #[must_use]
    pub fn edges_per_vertex(&self) -> usize {
        self.edges_per_vertex
    }

    /// Returns the final vertex count (`n`).
    #[must_use]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the consecutive-rejection budget.
    #[must_use]
    pub fn retry_budget(&self) -> usize {
        self.retry_budget
    }
}

/// Parameters for the HOT-Extended geometric/hop-distance generator.
///
/// # Examples
/// ```
/// use complexnets_core::HotExtendedParams;
///
/// let params = HotExtendedParams::new(2, 30, 0.5, 1, 2.0).expect("parameters must be valid");
/// assert_eq!(params.reinforcement_edges(), 1);
/// assert!(HotExtendedParams::new(2, 0, 0.5, 1, 2.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HotExtendedParams {
    edges_per_vertex: usize,
    vertices: usize,
    xi: f64,
    reinforcement_edges: usize,
    r: f64,
}

impl HotExtendedParams {
    /// Creates a parameter set.
    ///
    /// - `edges_per_vertex` (`m`): links made by each new vertex.
    /// - `vertices` (`n`): final vertex count.
    /// - `xi` (`ξ`): weight of the hop distance to the root during attachment.
    /// - `reinforcement_edges` (`q`): root links added after each attachment.
    /// - `r`: weight of the hop-distance gain during reinforcement.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameters`] when `vertices` is zero
    /// or when `xi` or `r` is negative or not finite.
    pub fn new(
        edges_per_vertex: usize,
        vertices: usize,
        xi: f64,
        reinforcement_edges: usize,
        r: f64,
    ) -> Result<Self> {
        if vertices == 0 {
            return Err(GeneratorError::invalid("vertices must be greater than zero"));
        }
        for (name, value) in [("xi", xi), ("r", r)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeneratorError::invalid(format!(
                    "{name} ({value}) must be finite and non-negative"
                )));
            }
        }
        Ok(Self {
            edges_per_vertex,
            vertices,
            xi,
            reinforcement_edges,
            r,
        })
    }

    /// Returns the number of links made by each new vertex (`m`).
    #[must_use]
    pub fn edges_per_vertex(&self) -> usize {
        self.edges_per_vertex
    }

    /// Returns the final vertex count (`n`).
    #[must_use]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the hop-distance weight used during attachment (`ξ`).
    #[must_use]
    pub fn xi(&self) -> f64 {
        self.xi
    }

    /// Returns the number of root links added per step (`q`).
    #[must_use]
    pub fn reinforcement_edges(&self) -> usize {
        self.reinforcement_edges
    }

    /// Returns the hop-distance-gain weight used during reinforcement.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.r
    }
}

/// Target degrees for the degree-sequence generator.
///
/// Vertex `k` of the realised graph (1-based) receives `degrees()[k - 1]` as
/// its target. Any sequence is accepted; targets a simple graph cannot reach
/// are left partially unsatisfied.
///
/// # Examples
/// ```
/// use complexnets_core::DegreeSequence;
///
/// let sequence = DegreeSequence::from_histogram(&[2, 1]);
/// assert_eq!(sequence.degrees(), [2, 1, 1]);
/// assert_eq!(sequence.total(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeSequence {
    degrees: Vec<usize>,
}

impl DegreeSequence {
    /// Wraps an explicit per-vertex degree list.
    #[must_use]
    pub fn new(degrees: Vec<usize>) -> Self {
        Self { degrees }
    }

    /// Expands a degree histogram where `counts[k]` is the number of vertices
    /// whose target degree is `k + 1`. Higher degrees come first.
    #[must_use]
    pub fn from_histogram(counts: &[usize]) -> Self {
        let degrees = counts
            .iter()
            .enumerate()
            .rev()
            .flat_map(|(index, &count)| std::iter::repeat_n(index + 1, count))
            .collect();
        Self { degrees }
    }

    /// Returns the per-vertex targets in vertex-id order.
    #[must_use]
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Reports whether the sequence names no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Returns the sum of all targets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.degrees.iter().sum()
    }
}

impl From<Vec<usize>> for DegreeSequence {
    fn from(degrees: Vec<usize>) -> Self {
        Self::new(degrees)
    }
}
