//! Common test utilities for building graphs, registries, and seed blocks.
use nagare::prelude::*;

/// A registry with the built-in units plus small deterministic test commands.
///
/// The `test.*` units read and write a `marker`/`fresh` entry so traversal
/// tests can observe exactly which branches saw which data block.
#[allow(dead_code)]
pub fn test_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::with_defaults();

    registry.register_fn("echo.ok", |_block| Ok(CommandOutput::Continue));

    registry.register_fn("test.mark", |block| {
        block.insert("marker".to_string(), serde_json::json!(true));
        Ok(CommandOutput::Continue)
    });

    registry.register_fn("test.assertMarked", |block| {
        if block.contains_key("marker") {
            Ok(CommandOutput::Continue)
        } else {
            Err(CommandError::MissingKey("marker".to_string()))
        }
    });

    registry.register_fn("test.assertUnmarked", |block| {
        if block.contains_key("marker") {
            Err(CommandError::failed("marker leaked into this branch"))
        } else {
            Ok(CommandOutput::Continue)
        }
    });

    registry.register_fn("test.replace", |_block| {
        let mut fresh = DataBlock::new();
        fresh.insert("fresh".to_string(), serde_json::json!(true));
        Ok(CommandOutput::Replace(fresh))
    });

    registry.register_fn("test.assertFresh", |block| {
        if block.contains_key("fresh") {
            Ok(CommandOutput::Continue)
        } else {
            Err(CommandError::MissingKey("fresh".to_string()))
        }
    });

    registry.register_fn("test.assertStale", |block| {
        if block.contains_key("fresh") {
            Err(CommandError::failed("replacement block leaked to a sibling"))
        } else {
            Ok(CommandOutput::Continue)
        }
    });

    registry.register_fn("raise.always", |_block| {
        Err(CommandError::failed("this unit always raises"))
    });

    registry
}

/// A tree holding only the mandatory "start" router.
#[allow(dead_code)]
pub fn router_root() -> GraphTree {
    GraphTree::with_root(NodeRecord::new("start", None))
}

/// Appends a named node bound to `command` under `parent`.
#[allow(dead_code)]
pub fn add(graph: &mut GraphTree, parent: NodeId, name: &str, command: Option<&str>) -> NodeId {
    graph.add_child(parent, NodeRecord::new(name, command))
}

/// Names of the reported nodes, in traversal order.
#[allow(dead_code)]
pub fn reported_names(report: &RunReport) -> Vec<String> {
    report.nodes.iter().map(|n| n.name.clone()).collect()
}

/// A session around [`test_registry`] with the given policies.
#[allow(dead_code)]
pub fn session(strict: bool, propagate: bool) -> RunSession {
    RunSession::builder(test_registry())
        .strict(strict)
        .propagate(propagate)
        .build()
}

/// A seed block with the keys the built-in `custom.*` units read.
/// `why` is left out on purpose so `custom.processWhy` raises.
#[allow(dead_code)]
pub fn seed_block() -> DataBlock {
    let mut block = DataBlock::new();
    block.insert("who".to_string(), serde_json::json!("somebody"));
    block.insert("what".to_string(), serde_json::json!("a node graph"));
    block.insert("where".to_string(), serde_json::json!("somewhere"));
    block.insert("when".to_string(), serde_json::json!("now"));
    block
}

/// A persisted document in the wrapped `{"nodes": ..., "groups": ...}` form,
/// shaped like an editor save: start router, one mid router, two leaves.
#[allow(dead_code)]
pub fn sample_graph_json() -> String {
    serde_json::json!({
        "nodes": {
            "name": "start",
            "class": "widgets.StartNode",
            "description": "",
            "command": null,
            "x": 0.0,
            "y": 0.0,
            "uuid": "6b7f2249-8b96-4fa7-a1cd-44c68001a022",
            "in_node": null,
            "out_nodes": [
                {
                    "name": "gate",
                    "class": "widgets.ItemNode",
                    "description": "router in the middle",
                    "command": null,
                    "x": 180.0,
                    "y": 0.0,
                    "uuid": "e2f9d1ce-99e2-4f57-9fc3-8c4bfb6ba3ad",
                    "in_node": {
                        "name": "start",
                        "uuid": "6b7f2249-8b96-4fa7-a1cd-44c68001a022"
                    },
                    "out_nodes": [
                        {
                            "name": "first",
                            "class": "widgets.ItemNode",
                            "description": "",
                            "command": "basic.echo",
                            "x": 360.0,
                            "y": 0.0,
                            "uuid": "27a24a3f-6b53-4a3b-9f19-91d3029a1a2e",
                            "in_node": {
                                "name": "gate",
                                "uuid": "e2f9d1ce-99e2-4f57-9fc3-8c4bfb6ba3ad"
                            },
                            "out_nodes": []
                        },
                        {
                            "name": "second",
                            "class": "widgets.ItemNode",
                            "description": "",
                            "command": "basic.printDatablock",
                            "x": 360.0,
                            "y": 120.0,
                            "uuid": "a1f9ed79-24a6-44cd-90a0-576b07aa39f4",
                            "in_node": {
                                "name": "gate",
                                "uuid": "e2f9d1ce-99e2-4f57-9fc3-8c4bfb6ba3ad"
                            },
                            "out_nodes": []
                        }
                    ]
                }
            ]
        },
        "groups": [
            {
                "name": "leaves",
                "uuid": "0cb5ac04-9f25-4fc1-a469-844756a6ba09",
                "children": [
                    {"name": "first", "uuid": "27a24a3f-6b53-4a3b-9f19-91d3029a1a2e"},
                    {"name": "second", "uuid": "a1f9ed79-24a6-44cd-90a0-576b07aa39f4"}
                ],
                "rect": {"x": 340.0, "y": -20.0, "w": 240.0, "h": 200.0}
            }
        ]
    })
    .to_string()
}
