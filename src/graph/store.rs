//! In-memory graph storage implementation
//!
//! A directed graph stored as an insertion-ordered adjacency list plus a map of
//! explicit edge weights. Edges without an entry in the weight map have weight
//! [`DEFAULT_WEIGHT`].

use super::types::{EdgeKey, NodeId, Weight, DEFAULT_WEIGHT};
use indexmap::{IndexMap, IndexSet};

/// In-memory directed, weighted graph
///
/// - edges: N -> Vec<N> (outgoing adjacency list, insertion order preserved)
/// - edge_weights: (N, N) -> Weight (only weights different from 1)
///
/// Adjacency lists may hold the same target more than once; parallel edges share a
/// single weight slot.
///
/// # Example
///
/// ```
/// use wgraph::Graph;
///
/// let mut graph = Graph::new();
/// graph
///     .add_edge("a", "b")
///     .add_weighted_edge("b", "c", 4.0);
///
/// assert_eq!(graph.all_nodes(), vec!["a", "b", "c"]);
/// assert_eq!(graph.edge_weight(&"a", &"b"), 1.0);
/// assert_eq!(graph.edge_weight(&"b", &"c"), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N> {
    /// Adjacency list: node -> outgoing targets
    edges: IndexMap<N, Vec<N>>,

    /// Explicit (non-default) edge weights
    edge_weights: IndexMap<(N, N), Weight>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges && self.edge_weights == other.edge_weights
    }
}

impl<N: NodeId> Graph<N> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Graph {
            edges: IndexMap::new(),
            edge_weights: IndexMap::new(),
        }
    }

    /// The adjacency list, keyed by node in insertion order
    pub fn edges(&self) -> &IndexMap<N, Vec<N>> {
        &self.edges
    }

    /// The explicitly stored edge weights
    pub fn edge_weights(&self) -> &IndexMap<(N, N), Weight> {
        &self.edge_weights
    }

    /// Number of distinct nodes (keys and edge targets)
    pub fn len(&self) -> usize {
        self.node_set().len()
    }

    /// Agrees with `len() == 0`: `add_edge` always gives the target its own adjacency entry
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of edges, counting parallel edges separately
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Returns true if the node has an adjacency entry or is the target of an edge
    pub fn contains_node(&self, node: &N) -> bool {
        self.edges.contains_key(node) || self.edges.values().any(|targets| targets.contains(node))
    }

    /// Add a node with an empty adjacency list.
    ///
    /// Does nothing if the node already exists; existing edges are kept.
    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.edges.entry(node).or_default();
        self
    }

    /// Remove a node together with its incoming and outgoing edges and their weights.
    ///
    /// Does nothing if the node does not exist.
    pub fn remove_node(&mut self, node: &N) -> &mut Self {
        // Incoming edges
        for (source, targets) in self.edges.iter_mut() {
            if targets.contains(node) {
                targets.retain(|target| target != node);
                self.edge_weights.shift_remove(&EdgeKey::new(source, node));
            }
        }

        // Outgoing edges
        if let Some(targets) = self.edges.shift_remove(node) {
            for target in &targets {
                self.edge_weights.shift_remove(&EdgeKey::new(node, target));
            }
        }

        self
    }

    /// All nodes in first-seen order.
    ///
    /// Walks the adjacency keys in insertion order and, for each key, its targets in
    /// order, recording every node the first time it appears.
    pub fn all_nodes(&self) -> Vec<N> {
        self.node_set().into_iter().cloned().collect()
    }

    fn node_set(&self) -> IndexSet<&N> {
        let mut seen = IndexSet::with_capacity(self.edges.len());
        for (source, targets) in &self.edges {
            seen.insert(source);
            seen.extend(targets);
        }
        seen
    }

    /// Outgoing targets of a node in insertion order; empty for unknown nodes
    pub fn adjacent_to(&self, node: &N) -> &[N] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Set the weight of the edge `source -> target`.
    ///
    /// A weight equal to [`DEFAULT_WEIGHT`] is never stored; passing it leaves any
    /// existing entry untouched.
    pub fn set_edge_weight(&mut self, source: N, target: N, weight: Weight) {
        if weight != DEFAULT_WEIGHT {
            self.edge_weights.insert((source, target), weight);
        }
    }

    /// Weight of the edge `source -> target`, or [`DEFAULT_WEIGHT`] if none is set
    pub fn edge_weight(&self, source: &N, target: &N) -> Weight {
        self.edge_weights
            .get(&EdgeKey::new(source, target))
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }

    /// Drop the stored weight of `source -> target`, resetting it to the default.
    ///
    /// The edge itself is kept.
    pub fn remove_edge_weight(&mut self, source: &N, target: &N) {
        self.edge_weights.shift_remove(&EdgeKey::new(source, target));
    }

    /// Add an edge `source -> target` with the default weight.
    ///
    /// Both nodes are added if missing. Adding the same edge twice appends the target
    /// twice.
    pub fn add_edge(&mut self, source: N, target: N) -> &mut Self {
        self.edges.entry(source).or_default().push(target.clone());
        self.edges.entry(target).or_default();
        self
    }

    /// Add an edge `source -> target` and set its weight
    pub fn add_weighted_edge(&mut self, source: N, target: N, weight: Weight) -> &mut Self {
        self.add_edge(source.clone(), target.clone());
        self.set_edge_weight(source, target, weight);
        self
    }

    /// Remove every `source -> target` edge and its weight. Nodes are kept.
    ///
    /// Does nothing if `source` is unknown or the edge does not exist.
    pub fn remove_edge(&mut self, source: &N, target: &N) -> &mut Self {
        if let Some(targets) = self.edges.get_mut(source) {
            targets.retain(|node| node != target);
            self.edge_weights.shift_remove(&EdgeKey::new(source, target));
        }
        self
    }

    /// Number of edges pointing at `node`. Costs O(E).
    pub fn in_degree(&self, node: &N) -> usize {
        self.edges
            .values()
            .map(|targets| targets.iter().filter(|target| *target == node).count())
            .sum()
    }

    /// Number of edges leaving `node`; 0 for unknown nodes
    pub fn out_degree(&self, node: &N) -> usize {
        self.edges.get(node).map_or(0, Vec::len)
    }
}
