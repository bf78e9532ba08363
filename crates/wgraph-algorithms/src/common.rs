//! Shared utilities for graph algorithms
//!
//! Provides the read-only view of a graph's topology that every algorithm in this
//! crate runs against. Algorithms never mutate the graph; they only ask for the
//! node list, a node's successors, and edge weights.

use std::fmt::Debug;
use std::hash::Hash;

/// Edge weight type
pub type Weight = f64;

/// Weight of an edge that carries no explicit weight
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Bound for node identifiers.
///
/// Any cloneable, hashable, equality-comparable value works. `Debug` is required so
/// that identifiers can be reported in errors and log lines.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}

/// A read-only view of a directed, weighted graph.
pub trait GraphView {
    /// Node identifier type
    type Node: NodeId;

    /// All nodes, in the graph's deterministic first-seen order
    fn nodes(&self) -> Vec<Self::Node>;

    /// Outgoing neighbors of a node, in insertion order.
    ///
    /// Unknown nodes have no successors.
    fn successors(&self, node: &Self::Node) -> &[Self::Node];

    /// Weight of the edge `source -> target`, or [`DEFAULT_WEIGHT`] if none is set
    fn weight(&self, source: &Self::Node, target: &Self::Node) -> Weight;
}
