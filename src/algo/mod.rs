//! Graph algorithms module
//!
//! Algorithms are implemented in the `wgraph-algorithms` crate against the
//! read-only [`GraphView`] trait. This module provides the integration layer:
//! it exposes [`Graph`] as a `GraphView` and re-exports the algorithms.

use crate::graph::{Graph, NodeId, Weight};
use wgraph_algorithms::GraphView;

// Re-export algorithms
pub use wgraph_algorithms::{
    depth_first_search, depth_first_search_with,
    topological_sort, topological_sort_with, TraversalConfig,
    dijkstra, dijkstra_filtered, Endpoint, PathError, PathResult,
};

impl<N: NodeId> GraphView for Graph<N> {
    type Node = N;

    fn nodes(&self) -> Vec<N> {
        self.all_nodes()
    }

    fn successors(&self, node: &N) -> &[N] {
        self.adjacent_to(node)
    }

    fn weight(&self, source: &N, target: &N) -> Weight {
        self.edge_weight(source, target)
    }
}
