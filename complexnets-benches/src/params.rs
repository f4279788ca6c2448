//! Benchmark parameter types.
//!
//! Each type renders a compact `Display` label used as the Criterion
//! benchmark id.

use std::fmt;

/// Size parameters shared by the attachment-style generators.
#[derive(Clone, Copy, Debug)]
pub struct GrowthBenchParams {
    /// Final number of vertices.
    pub vertex_count: usize,
    /// Links made by each new vertex.
    pub edges_per_vertex: usize,
}

impl fmt::Display for GrowthBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edges_per_vertex)
    }
}

/// Parameters for a HOT-Extended run.
#[derive(Clone, Copy, Debug)]
pub struct HotExtendedBenchParams {
    /// Final number of vertices.
    pub vertex_count: usize,
    /// Root links added per step.
    pub reinforcement_edges: usize,
}

impl fmt::Display for HotExtendedBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},q={}", self.vertex_count, self.reinforcement_edges)
    }
}

/// Parameters for runs over a prebuilt graph.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the prebuilt graph.
    pub vertex_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn labels_are_compact() {
        let growth = GrowthBenchParams {
            vertex_count: 500,
            edges_per_vertex: 3,
        };
        let hot = HotExtendedBenchParams {
            vertex_count: 200,
            reinforcement_edges: 1,
        };
        assert_eq!(growth.to_string(), "n=500,m=3");
        assert_eq!(hot.to_string(), "n=200,q=1");
        assert_eq!(GraphBenchParams { vertex_count: 9 }.to_string(), "n=9");
    }
}
