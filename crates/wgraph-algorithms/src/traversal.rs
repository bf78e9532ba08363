//! Depth-first traversal and topological ordering
//!
//! Both algorithms follow Cormen et al., "Introduction to Algorithms" (3rd ed.):
//! DFS emits nodes in finish order, and reversing that order yields a topological
//! sort when the visited subgraph is acyclic.

use super::common::GraphView;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Traversal options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Emit the source nodes themselves (default `true`).
    ///
    /// When `false`, sources are still marked visited and still seed the
    /// traversal of their successors, but never appear in the output.
    pub include_source_nodes: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            include_source_nodes: true,
        }
    }
}

/// Depth-First Search
///
/// Returns nodes in finish (post-) order: a node is emitted only after every node
/// reachable from it has been emitted. Successors are visited in adjacency order.
///
/// `source_nodes` defaults to every node in the graph. Unknown source nodes are
/// treated as nodes without outgoing edges.
pub fn depth_first_search<V: GraphView>(
    view: &V,
    source_nodes: Option<&[V::Node]>,
    include_source_nodes: bool,
) -> Vec<V::Node> {
    depth_first_search_with(
        view,
        source_nodes,
        TraversalConfig {
            include_source_nodes,
        },
    )
}

/// Depth-First Search driven by a [`TraversalConfig`]
pub fn depth_first_search_with<V: GraphView>(
    view: &V,
    source_nodes: Option<&[V::Node]>,
    config: TraversalConfig,
) -> Vec<V::Node> {
    let all_nodes;
    let sources = match source_nodes {
        Some(nodes) => nodes,
        None => {
            all_nodes = view.nodes();
            all_nodes.as_slice()
        }
    };

    let mut search = Search {
        view,
        visited: FxHashSet::default(),
        finished: Vec::new(),
    };

    if config.include_source_nodes {
        for node in sources {
            search.visit(node);
        }
    } else {
        for node in sources {
            search.visited.insert(node.clone());
            for next in view.successors(node) {
                search.visit(next);
            }
        }
    }

    debug!(
        sources = sources.len(),
        emitted = search.finished.len(),
        include_source_nodes = config.include_source_nodes,
        "depth-first search complete"
    );

    search.finished
}

/// Topological Sort
///
/// The reversed finish order of [`depth_first_search`]. For every visited edge
/// `(u, v)`, `u` precedes `v` provided the visited subgraph is acyclic. Cycles are
/// not detected; on cyclic input the ordering guarantee silently does not hold.
pub fn topological_sort<V: GraphView>(
    view: &V,
    source_nodes: Option<&[V::Node]>,
    include_source_nodes: bool,
) -> Vec<V::Node> {
    topological_sort_with(
        view,
        source_nodes,
        TraversalConfig {
            include_source_nodes,
        },
    )
}

/// Topological Sort driven by a [`TraversalConfig`]
pub fn topological_sort_with<V: GraphView>(
    view: &V,
    source_nodes: Option<&[V::Node]>,
    config: TraversalConfig,
) -> Vec<V::Node> {
    let mut order = depth_first_search_with(view, source_nodes, config);
    order.reverse();
    order
}

/// Working state of one traversal
struct Search<'a, V: GraphView> {
    view: &'a V,
    visited: FxHashSet<V::Node>,
    finished: Vec<V::Node>,
}

impl<'a, V: GraphView> Search<'a, V> {
    /// Post-order visit rooted at `root`.
    ///
    /// Each frame holds a node and the index of its next successor to explore, which
    /// reproduces the recursive visit order without growing the call stack.
    fn visit(&mut self, root: &V::Node) {
        if !self.visited.insert(root.clone()) {
            return;
        }

        let view = self.view;
        let mut stack: Vec<(V::Node, usize)> = vec![(root.clone(), 0)];

        while let Some((node, index)) = stack.last_mut() {
            if let Some(next) = view.successors(node).get(*index) {
                *index += 1;
                if self.visited.insert(next.clone()) {
                    stack.push((next.clone(), 0));
                }
            } else if let Some((node, _)) = stack.pop() {
                self.finished.push(node);
            }
        }
    }
}
