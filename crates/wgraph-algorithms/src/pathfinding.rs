//! Pathfinding algorithms
//!
//! Single-pair Dijkstra shortest path with an optional node filter.

use super::common::{GraphView, NodeId, Weight};
use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<N> {
    /// Nodes from source to destination, both included
    pub path: Vec<N>,
    /// Sum of the edge weights along `path`
    pub distance: Weight,
}

/// Which end of a path request an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => write!(f, "Source"),
            Endpoint::Destination => write!(f, "Destination"),
        }
    }
}

/// Errors that can occur during pathfinding
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError<N: fmt::Debug> {
    /// The source or destination is not a node of the graph
    #[error("{endpoint} node {node:?} is not in the graph")]
    NodeNotFound { node: N, endpoint: Endpoint },

    /// No predecessor chain connects the destination back to the source
    #[error("No path found from {from:?} to {to:?}")]
    PathNotFound { from: N, to: N },
}

impl<N: fmt::Debug> PathError<N> {
    /// Returns true for either flavor of missing endpoint
    pub fn is_node_not_found(&self) -> bool {
        matches!(self, PathError::NodeNotFound { .. })
    }

    /// Returns true when both endpoints exist but are not connected
    pub fn is_path_not_found(&self) -> bool {
        matches!(self, PathError::PathNotFound { .. })
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Equivalent to [`dijkstra_filtered`] with a filter that accepts every node.
pub fn dijkstra<V: GraphView>(
    view: &V,
    source: &V::Node,
    destination: &V::Node,
) -> Result<PathResult<V::Node>, PathError<V::Node>> {
    dijkstra_filtered(view, source, destination, |_| true)
}

/// Dijkstra's Algorithm restricted to the nodes accepted by `filter`.
///
/// Only accepted nodes are ever selected and have their outgoing edges relaxed;
/// rejected nodes stay in the graph but are never expanded. The minimum is found by
/// a linear scan over the remaining candidates, so ties go to the candidate that
/// comes first in the graph's node order. Negative weights are not rejected.
///
/// Fails with [`PathError::NodeNotFound`] before any search work if either endpoint
/// is missing, and with [`PathError::PathNotFound`] if the destination cannot be
/// traced back to the source.
pub fn dijkstra_filtered<V, F>(
    view: &V,
    source: &V::Node,
    destination: &V::Node,
    filter: F,
) -> Result<PathResult<V::Node>, PathError<V::Node>>
where
    V: GraphView,
    F: Fn(&V::Node) -> bool,
{
    let nodes = view.nodes();

    // Upper bounds for shortest path weights from source
    let mut dist: FxHashMap<V::Node, Weight> = nodes
        .iter()
        .map(|node| (node.clone(), Weight::INFINITY))
        .collect();

    if !dist.contains_key(source) {
        return Err(PathError::NodeNotFound {
            node: source.clone(),
            endpoint: Endpoint::Source,
        });
    }
    if !dist.contains_key(destination) {
        return Err(PathError::NodeNotFound {
            node: destination.clone(),
            endpoint: Endpoint::Destination,
        });
    }
    dist.insert(source.clone(), 0.0);

    let mut parent: FxHashMap<V::Node, V::Node> = FxHashMap::default();
    let mut queue: IndexSet<V::Node> = nodes.into_iter().filter(|node| filter(node)).collect();

    debug!(
        source = ?source,
        destination = ?destination,
        candidates = queue.len(),
        "dijkstra start"
    );

    while let Some(u) = extract_min(&mut queue, &dist) {
        let du = distance_of(&dist, &u);
        for v in view.successors(&u) {
            let next_cost = du + view.weight(&u, v);
            if next_cost < distance_of(&dist, v) {
                dist.insert(v.clone(), next_cost);
                parent.insert(v.clone(), u.clone());
            }
        }
    }

    let result = reconstruct_path(view, &parent, source, destination);
    match &result {
        Ok(found) => debug!(hops = found.path.len(), distance = found.distance, "dijkstra path found"),
        Err(err) => debug!(%err, "dijkstra failed"),
    }
    result
}

fn distance_of<N: NodeId>(dist: &FxHashMap<N, Weight>, node: &N) -> Weight {
    dist.get(node).copied().unwrap_or(Weight::INFINITY)
}

/// Linear search to find and remove the candidate with the smallest finite distance.
///
/// When every remaining candidate is unreachable the queue is drained, which ends
/// the search.
fn extract_min<N: NodeId>(queue: &mut IndexSet<N>, dist: &FxHashMap<N, Weight>) -> Option<N> {
    let mut min = Weight::INFINITY;
    let mut min_index = None;

    for (index, node) in queue.iter().enumerate() {
        let d = distance_of(dist, node);
        if d < min {
            min = d;
            min_index = Some(index);
        }
    }

    match min_index {
        // shift_remove keeps the remaining candidates in order for later tie-breaks
        Some(index) => queue.shift_remove_index(index),
        None => {
            if !queue.is_empty() {
                trace!(unreachable = queue.len(), "remaining candidates are disconnected");
                queue.clear();
            }
            None
        }
    }
}

/// Walks the predecessor chain from `destination` back to `source`
fn reconstruct_path<V: GraphView>(
    view: &V,
    parent: &FxHashMap<V::Node, V::Node>,
    source: &V::Node,
    destination: &V::Node,
) -> Result<PathResult<V::Node>, PathError<V::Node>> {
    let not_found = || PathError::PathNotFound {
        from: source.clone(),
        to: destination.clone(),
    };

    let mut path = vec![destination.clone()];
    let mut seen = FxHashSet::default();
    let mut distance = 0.0;
    let mut node = destination;
    seen.insert(destination);

    while node != source {
        let prev = parent.get(node).ok_or_else(not_found)?;
        // Negative weights can leave a loop in the predecessor chain
        if !seen.insert(prev) {
            return Err(not_found());
        }
        distance += view.weight(prev, node);
        path.push(prev.clone());
        node = prev;
    }

    path.reverse();
    Ok(PathResult { path, distance })
}
