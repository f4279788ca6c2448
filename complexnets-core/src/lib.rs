//! Complex-network core library: graph store, breadth-first traversal,
//! largest-component pruning and stochastic graph generators.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod connectivity;
mod error;
mod generators;
mod graph;
mod traversal;

#[cfg(test)]
mod test_utils;

pub use crate::{
    connectivity::{Component, ComponentSummary, connected_components, retain_largest_component},
    error::{GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode, Result},
    generators::{
        BarabasiAlbertParams, DEFAULT_RETRY_BUDGET, DegreeSequence, ErdosRenyiParams,
        GraphGenerator, HotExtendedParams, generate_barabasi_albert, generate_degree_sequence,
        generate_erdos_renyi, generate_hot_extended,
    },
    graph::{Graph, Vertex, VertexId},
    traversal::{BreadthFirst, Visit, connected_component, hop_distances, hops},
};
