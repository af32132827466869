//! Tests for graph document parsing, pair-based linking, and round-trips.
mod common;
use common::*;
use nagare::graph::loader;
use nagare::prelude::*;

#[test]
fn parses_a_wrapped_document() {
    let graph = loader::from_str(&sample_graph_json()).expect("Failed to load sample graph");

    assert_eq!(graph.len(), 4);
    let root = graph.node(graph.root());
    assert_eq!(root.name, "start");
    assert!(root.is_router());
    assert!(root.parent.is_none());
    assert_eq!(root.children.len(), 1);
}

#[test]
fn parses_a_bare_root_document() {
    let json = serde_json::json!({
        "name": "start",
        "command": null,
        "x": 0.0,
        "y": 0.0,
        "uuid": "6b7f2249-8b96-4fa7-a1cd-44c68001a022",
        "out_nodes": []
    })
    .to_string();

    let graph = loader::from_str(&json).expect("Failed to load bare document");

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.node(graph.root()).name, "start");
    assert!(graph.groups().is_empty());
}

#[test]
fn links_children_in_out_nodes_order() {
    let graph = loader::from_str(&sample_graph_json()).unwrap();

    let root = graph.node(graph.root());
    let gate = graph.node(root.children[0]);
    assert_eq!(gate.name, "gate");
    assert!(gate.is_router());

    let names: Vec<_> = gate
        .children
        .iter()
        .map(|&id| graph.node(id).name.as_str())
        .collect();
    assert_eq!(names, vec!["first", "second"]);

    for &child in &gate.children {
        assert_eq!(graph.node(child).parent, Some(root.children[0]));
    }
}

#[test]
fn keeps_commands_and_positions() {
    let graph = loader::from_str(&sample_graph_json()).unwrap();

    let first = graph
        .nodes()
        .find(|n| n.name == "first")
        .expect("first missing");
    assert_eq!(first.command.as_deref(), Some("basic.echo"));
    assert_eq!(first.x, 360.0);
    assert_eq!(first.class_name.as_deref(), Some("widgets.ItemNode"));
}

#[test]
fn carries_groups_through_opaquely() {
    let graph = loader::from_str(&sample_graph_json()).unwrap();

    assert_eq!(graph.groups().len(), 1);
    assert_eq!(graph.groups()[0]["name"], "leaves");
    assert_eq!(graph.groups()[0]["children"][1]["name"], "second");
}

#[test]
fn rejects_duplicate_name_uuid_pairs() {
    let json = serde_json::json!({
        "name": "start",
        "command": null,
        "uuid": "6b7f2249-8b96-4fa7-a1cd-44c68001a022",
        "out_nodes": [
            {
                "name": "twin",
                "command": "basic.echo",
                "uuid": "27a24a3f-6b53-4a3b-9f19-91d3029a1a2e",
                "out_nodes": []
            },
            {
                "name": "twin",
                "command": "basic.echo",
                "uuid": "27a24a3f-6b53-4a3b-9f19-91d3029a1a2e",
                "out_nodes": []
            }
        ]
    })
    .to_string();

    let result = loader::from_str(&json);
    match result {
        Err(GraphLoadError::DuplicateNode { name, .. }) => assert_eq!(name, "twin"),
        other => panic!("Expected DuplicateNode, got {:?}", other.map(|g| g.len())),
    }
}

#[test]
fn missing_file_surfaces_an_io_error() {
    let result = loader::load_file("/no/such/graph.json");
    match result {
        Err(GraphLoadError::Io { path, .. }) => assert!(path.contains("graph.json")),
        other => panic!("Expected Io error, got {:?}", other.map(|g| g.len())),
    }
}

#[test]
fn malformed_json_surfaces_a_parse_error() {
    let result = loader::from_str("{not json");
    assert!(matches!(result, Err(GraphLoadError::JsonParse(_))));
}

#[test]
fn stale_in_node_references_are_tolerated() {
    // in_node claims the wrong parent; pair wiring from out_nodes wins.
    let json = serde_json::json!({
        "name": "start",
        "command": null,
        "uuid": "6b7f2249-8b96-4fa7-a1cd-44c68001a022",
        "out_nodes": [
            {
                "name": "child",
                "command": "basic.echo",
                "uuid": "27a24a3f-6b53-4a3b-9f19-91d3029a1a2e",
                "in_node": {
                    "name": "somebody_else",
                    "uuid": "a1f9ed79-24a6-44cd-90a0-576b07aa39f4"
                },
                "out_nodes": []
            }
        ]
    })
    .to_string();

    let graph = loader::from_str(&json).expect("stale in_node must not be fatal");
    let child = graph.nodes().find(|n| n.name == "child").unwrap();
    assert_eq!(child.parent, Some(graph.root()));
}

#[test]
fn round_trip_preserves_structure() {
    let original = loader::from_str(&sample_graph_json()).unwrap();

    let json = loader::to_string(&original).expect("Failed to serialize tree");
    let reloaded = loader::from_str(&json).expect("Failed to reload tree");

    assert_eq!(original.len(), reloaded.len());
    assert_eq!(original.groups(), reloaded.groups());
    assert_isomorphic(&original, original.root(), &reloaded, reloaded.root());
}

#[test]
fn round_trip_through_a_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("graph.json");

    let original = loader::from_str(&sample_graph_json()).unwrap();
    loader::save_file(&original, &path).expect("Failed to save graph");

    let reloaded = loader::load_file(&path).expect("Failed to reload graph");
    assert_isomorphic(&original, original.root(), &reloaded, reloaded.root());
}

#[test]
fn saved_documents_rebuild_in_node_from_the_tree() {
    let mut graph = router_root();
    let root = graph.root();
    let mid = add(&mut graph, root, "mid", Some("basic.echo"));
    add(&mut graph, mid, "leaf", Some("basic.echo"));

    let document = loader::to_document(&graph);
    let mid_doc = &document.root().out_nodes[0];
    let leaf_doc = &mid_doc.out_nodes[0];

    assert!(document.root().in_node.is_none());
    assert_eq!(mid_doc.in_node.as_ref().unwrap().name, "start");
    assert_eq!(leaf_doc.in_node.as_ref().unwrap().name, "mid");
    assert_eq!(leaf_doc.in_node.as_ref().unwrap().uuid, graph.node(mid).uuid);
}

/// Walks both trees in lockstep comparing persisted fields and child order.
fn assert_isomorphic(a: &GraphTree, a_id: NodeId, b: &GraphTree, b_id: NodeId) {
    let left = a.node(a_id);
    let right = b.node(b_id);
    assert_eq!(left.name, right.name);
    assert_eq!(left.uuid, right.uuid);
    assert_eq!(left.command, right.command);
    assert_eq!(left.children.len(), right.children.len());
    for (&la, &rb) in left.children.iter().zip(&right.children) {
        assert_isomorphic(a, la, b, rb);
    }
}
