pub mod common;
pub mod pathfinding;
pub mod traversal;

pub use common::{GraphView, NodeId, Weight, DEFAULT_WEIGHT};
pub use pathfinding::{dijkstra, dijkstra_filtered, Endpoint, PathError, PathResult};
pub use traversal::{
    depth_first_search, depth_first_search_with, topological_sort, topological_sort_with,
    TraversalConfig,
};
