//! wgraph
//!
//! An in-memory directed, weighted graph with three classical algorithms on top:
//! depth-first search, topological sort and single-pair Dijkstra shortest path.
//!
//! # Architecture
//!
//! - [`graph`]: the [`Graph`] data structure (adjacency lists, edge weights,
//!   nodes + links serialization)
//! - [`algo`]: adapter exposing [`Graph`] to the `wgraph-algorithms` crate, which
//!   implements the algorithms against a read-only view
//!
//! Algorithms never mutate the graph. Each call owns its working state, so a graph
//! can be searched repeatedly; mutating it concurrently with a search is not
//! supported.
//!
//! ## Example Usage
//!
//! ```rust
//! use wgraph::{depth_first_search, dijkstra, topological_sort, Graph};
//!
//! let mut graph = Graph::new();
//! graph
//!     .add_edge("a", "b")
//!     .add_weighted_edge("a", "c", 2.0)
//!     .add_weighted_edge("b", "c", 5.0);
//!
//! assert_eq!(depth_first_search(&graph, None, true), vec!["c", "b", "a"]);
//! assert_eq!(topological_sort(&graph, None, true), vec!["a", "b", "c"]);
//!
//! let shortest = dijkstra(&graph, &"a", &"c").unwrap();
//! assert_eq!(shortest.path, vec!["a", "c"]);
//! assert_eq!(shortest.distance, 2.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    EdgeKey, Graph, GraphError, GraphResult, LinkRecord, NodeId, NodeRecord, SerializedGraph,
    Weight, DEFAULT_WEIGHT,
};

pub use algo::{
    depth_first_search, depth_first_search_with, dijkstra, dijkstra_filtered, topological_sort,
    topological_sort_with, Endpoint, PathError, PathResult, TraversalConfig,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
