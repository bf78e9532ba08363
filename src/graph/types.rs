//! Core type definitions for the graph

use indexmap::Equivalent;
use std::hash::Hash;

pub use wgraph_algorithms::{NodeId, Weight, DEFAULT_WEIGHT};

/// Borrowed form of a directed edge `(source, target)`.
///
/// Hashes exactly like the owned `(N, N)` key of the weight map, so weights can be
/// looked up and removed without cloning either endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey<'a, N>(pub &'a N, pub &'a N);

impl<'a, N> EdgeKey<'a, N> {
    pub fn new(source: &'a N, target: &'a N) -> Self {
        EdgeKey(source, target)
    }
}

impl<N: Eq + Hash> Equivalent<(N, N)> for EdgeKey<'_, N> {
    fn equivalent(&self, key: &(N, N)) -> bool {
        *self.0 == key.0 && *self.1 == key.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_edge_key_lookup() {
        let mut weights: IndexMap<(String, String), Weight> = IndexMap::new();
        weights.insert(("foo".to_string(), "bar".to_string()), 5.0);

        let foo = "foo".to_string();
        let bar = "bar".to_string();
        assert_eq!(weights.get(&EdgeKey::new(&foo, &bar)), Some(&5.0));
        assert_eq!(weights.get(&EdgeKey::new(&bar, &foo)), None);
    }
}
