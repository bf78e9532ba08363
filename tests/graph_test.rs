use wgraph::{Graph, LinkRecord, NodeRecord, SerializedGraph};

fn weighted_graph() -> Graph<String> {
    let json = r#"{
        "nodes": [{ "id": "foo" }, { "id": "bar" }, { "id": "blaz" }],
        "links": [
            { "source": "foo", "target": "bar", "weight": 7 },
            { "source": "bar", "target": "foo", "weight": 1 },
            { "source": "bar", "target": "blaz", "weight": 1 }
        ]
    }"#;
    Graph::from_json(json).unwrap()
}

fn s(value: &str) -> String {
    value.to_string()
}

#[test]
fn test_deserialize_from_json() {
    let graph = weighted_graph();

    assert_eq!(graph.all_nodes(), vec![s("foo"), s("bar"), s("blaz")]);
    assert_eq!(graph.adjacent_to(&s("foo")), &[s("bar")]);
    assert_eq!(graph.adjacent_to(&s("bar")), &[s("foo"), s("blaz")]);
    assert!(graph.adjacent_to(&s("blaz")).is_empty());

    // Only the non-default weight is stored
    assert_eq!(graph.edge_weights().len(), 1);
    assert_eq!(graph.edge_weight(&s("foo"), &s("bar")), 7.0);
}

#[test]
fn test_serialization_round_trip() {
    let mut graph = weighted_graph();
    graph
        .add_weighted_edge(s("blaz"), s("qux"), -2.5)
        .add_edge(s("qux"), s("foo"))
        .add_edge(s("qux"), s("foo"));

    let restored = Graph::from_serialized(&graph.serialize());
    assert_eq!(restored.edges(), graph.edges());
    assert_eq!(restored.edge_weights(), graph.edge_weights());
    assert_eq!(restored, graph);
}

#[test]
fn test_serialized_link_order() {
    // Targets seen before their own adjacency entry keep first-seen order
    let mut graph = Graph::new();
    graph.add_edge(3, 1).add_edge(1, 2).add_weighted_edge(3, 2, 4.0);

    let serialized = graph.serialize();
    assert_eq!(
        serialized.nodes,
        vec![NodeRecord { id: 3 }, NodeRecord { id: 1 }, NodeRecord { id: 2 }]
    );
    assert_eq!(
        serialized.links,
        vec![
            LinkRecord { source: 3, target: 1, weight: 1.0 },
            LinkRecord { source: 3, target: 2, weight: 4.0 },
            LinkRecord { source: 1, target: 2, weight: 1.0 },
        ]
    );
}

#[test]
fn test_construct_from_record() {
    let record = SerializedGraph {
        nodes: vec![NodeRecord { id: "a" }, NodeRecord { id: "b" }],
        links: vec![LinkRecord { source: "b", target: "a", weight: 1.0 }],
    };

    let graph: Graph<&str> = record.clone().into();
    assert_eq!(graph.all_nodes(), vec!["a", "b"]);
    assert_eq!(graph.in_degree(&"a"), 1);
    assert!(graph.edge_weights().is_empty());
    assert_eq!(graph.serialize(), record);
}

#[test]
fn test_graph_embeds_in_documents() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Plan {
        name: String,
        steps: Graph<String>,
    }

    let plan = Plan {
        name: s("release"),
        steps: weighted_graph(),
    };

    let json = serde_json::to_string(&plan).unwrap();
    let restored: Plan = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.name, "release");
    assert_eq!(restored.steps, plan.steps);
}

#[test]
fn test_node_idempotence() {
    let mut once = Graph::new();
    once.add_node("x");

    let mut twice = Graph::new();
    twice.add_node("x").add_node("x");

    assert_eq!(once, twice);

    let before = twice.clone();
    twice.remove_node(&"y").remove_node(&"y");
    assert_eq!(twice, before);
}

#[test]
fn test_remove_node_cleans_up() {
    let mut graph = weighted_graph();
    graph.remove_node(&s("bar"));

    assert_eq!(graph.all_nodes(), vec![s("foo"), s("blaz")]);
    assert!(graph.adjacent_to(&s("foo")).is_empty());
    assert!(graph.edge_weights().is_empty());
    assert_eq!(graph.edge_weight(&s("foo"), &s("bar")), 1.0);
}

#[test]
fn test_unknown_nodes_are_harmless() {
    let mut graph = weighted_graph();
    let before = graph.clone();

    assert!(graph.adjacent_to(&s("nope")).is_empty());
    assert_eq!(graph.out_degree(&s("nope")), 0);
    assert_eq!(graph.in_degree(&s("nope")), 0);
    graph.remove_edge(&s("nope"), &s("foo"));
    graph.remove_edge_weight(&s("nope"), &s("foo"));

    assert_eq!(graph, before);
}
