//! Nodes + links serialization
//!
//! The serialized form is a plain record that maps directly onto JSON:
//!
//! ```json
//! {
//!   "nodes": [{ "id": "foo" }, { "id": "bar" }],
//!   "links": [{ "source": "foo", "target": "bar", "weight": 7.0 }]
//! }
//! ```
//!
//! `nodes` follows [`Graph::all_nodes`] order and `links` lists every edge grouped
//! by source in that order, with the weight always present.

use super::store::Graph;
use super::types::{NodeId, Weight, DEFAULT_WEIGHT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while converting a graph to or from JSON
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// A node entry of a serialized graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord<N> {
    pub id: N,
}

/// An edge entry of a serialized graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord<N> {
    pub source: N,
    pub target: N,
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

/// Serialized graph: node list plus link list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedGraph<N> {
    pub nodes: Vec<NodeRecord<N>>,
    pub links: Vec<LinkRecord<N>>,
}

impl<N> Default for SerializedGraph<N> {
    fn default() -> Self {
        SerializedGraph {
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }
}

impl<N: NodeId> Graph<N> {
    /// Create a graph from a serialized record
    pub fn from_serialized(serialized: &SerializedGraph<N>) -> Self {
        let mut graph = Graph::new();
        graph.deserialize(serialized);
        graph
    }

    /// Serialize the graph into its nodes + links record
    pub fn serialize(&self) -> SerializedGraph<N> {
        let nodes = self.all_nodes();
        let mut links = Vec::with_capacity(self.edge_count());

        for source in &nodes {
            for target in self.adjacent_to(source) {
                links.push(LinkRecord {
                    source: source.clone(),
                    target: target.clone(),
                    weight: self.edge_weight(source, target),
                });
            }
        }

        SerializedGraph {
            nodes: nodes.into_iter().map(|id| NodeRecord { id }).collect(),
            links,
        }
    }

    /// Add the nodes and links of a serialized record to this graph.
    ///
    /// All nodes are added first, then every link with its weight, so the record's
    /// order determines the resulting adjacency order.
    pub fn deserialize(&mut self, serialized: &SerializedGraph<N>) {
        for node in &serialized.nodes {
            self.add_node(node.id.clone());
        }
        for link in &serialized.links {
            self.add_weighted_edge(link.source.clone(), link.target.clone(), link.weight);
        }

        debug!(
            nodes = serialized.nodes.len(),
            links = serialized.links.len(),
            "deserialized graph"
        );
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> GraphResult<String>
    where
        N: Serialize,
    {
        Ok(serde_json::to_string(&self.serialize())?)
    }

    /// Serialize to an indented JSON string
    pub fn to_json_pretty(&self) -> GraphResult<String>
    where
        N: Serialize,
    {
        Ok(serde_json::to_string_pretty(&self.serialize())?)
    }

    /// Build a graph from a JSON nodes + links document
    pub fn from_json(json: &str) -> GraphResult<Self>
    where
        N: DeserializeOwned,
    {
        let serialized: SerializedGraph<N> = serde_json::from_str(json)?;
        Ok(Graph::from_serialized(&serialized))
    }
}

impl<N: NodeId> From<SerializedGraph<N>> for Graph<N> {
    fn from(serialized: SerializedGraph<N>) -> Self {
        Graph::from_serialized(&serialized)
    }
}

impl<N: NodeId> From<&Graph<N>> for SerializedGraph<N> {
    fn from(graph: &Graph<N>) -> Self {
        graph.serialize()
    }
}

impl<N: NodeId + Serialize> Serialize for Graph<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Graph::serialize(self).serialize(serializer)
    }
}

impl<'de, N: NodeId + Deserialize<'de>> Deserialize<'de> for Graph<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        SerializedGraph::deserialize(deserializer).map(Graph::from)
    }
}
