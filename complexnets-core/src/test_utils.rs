//! Shared test utilities for `complexnets-core`.

use std::collections::HashSet;

use complexnets_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::{prelude::*, test_runner::Config as ProptestConfig};

use crate::graph::{Graph, VertexId};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `COMPLEXNETS_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Union-find with path compression, used as an independent oracle for the
/// BFS-based component machinery.
#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    pub(crate) fn union(&mut self, left: usize, right: usize) -> usize {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return left;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        left
    }
}

/// Counts the components of `graph` with the union-find oracle.
pub(crate) fn oracle_component_count(graph: &Graph) -> usize {
    let ids: Vec<VertexId> = graph.vertex_ids().collect();
    let position = |target: VertexId| ids.binary_search(&target).ok();
    let mut set = DisjointSet::new(ids.len());
    for (low, high) in graph.edges() {
        if let (Some(left), Some(right)) = (position(low), position(high)) {
            set.union(left, right);
        }
    }
    (0..ids.len())
        .map(|index| set.find(index))
        .collect::<HashSet<_>>()
        .len()
}

/// Asserts the simple-graph invariants: symmetric adjacency, no self-loops,
/// and an edge counter that matches the stored back-references.
pub(crate) fn assert_simple_graph(graph: &Graph) {
    let mut half_edges = 0_usize;
    for vertex in graph.vertices() {
        let neighbours = graph.neighbours(vertex.id());
        assert!(
            !neighbours.contains(&vertex.id()),
            "vertex {} lists itself as a neighbour",
            vertex.id()
        );
        let unique: HashSet<_> = neighbours.iter().collect();
        assert_eq!(unique.len(), neighbours.len(), "duplicate neighbour entry");
        for neighbour in &neighbours {
            assert!(
                graph.has_edge(*neighbour, vertex.id()),
                "edge {}-{} is not symmetric",
                vertex.id(),
                neighbour
            );
        }
        half_edges += neighbours.len();
    }
    assert_eq!(half_edges, graph.edge_count() * 2);
}

/// Strategy producing simple graphs on ids `1..=max_vertices`, including
/// isolated vertices and disconnected pieces.
pub(crate) fn arbitrary_graph(max_vertices: u64) -> impl Strategy<Value = Graph> {
    (1..=max_vertices).prop_flat_map(move |vertices| {
        let pair = (1..=vertices, 1..=vertices);
        proptest::collection::vec(pair, 0..=(vertices as usize * 2)).prop_map(move |pairs| {
            let mut graph = Graph::with_vertices(VertexId::sequence(vertices as usize))
                .expect("sequential ids are unique");
            for (left, right) in pairs {
                let (Some(left), Some(right)) = (VertexId::new(left), VertexId::new(right)) else {
                    continue;
                };
                if left != right && !graph.has_edge(left, right) {
                    graph.add_edge(left, right).expect("edge was checked");
                }
            }
            graph
        })
    })
}
