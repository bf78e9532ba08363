//! Core graph implementation
//!
//! This module implements the directed, weighted graph:
//! - Nodes identified by any hashable, comparable value
//! - Directed edges kept in insertion-ordered adjacency lists
//! - Optional per-edge weights (default 1)
//! - Nodes + links serialization

pub mod serialization;
pub mod store;
pub mod types;

// Re-export main types
pub use serialization::{GraphError, GraphResult, LinkRecord, NodeRecord, SerializedGraph};
pub use store::Graph;
pub use types::{EdgeKey, NodeId, Weight, DEFAULT_WEIGHT};
