use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name + uuid pair used to wire nodes together in the persisted document.
///
/// Linking is done purely from these pairs, never from object identity, so a
/// document survives being re-emitted by any editor that keeps them stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    pub name: String,
    pub uuid: Uuid,
}

/// One node as the editor saves it, successors nested under `out_nodes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDocument {
    pub name: String,
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: String,
    /// `None` marks a pass-through router node, including the root.
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub uuid: Uuid,
    #[serde(default)]
    pub out_nodes: Vec<NodeDocument>,
    #[serde(default)]
    pub in_node: Option<NodeRef>,
}

/// A persisted graph file.
///
/// Editors write `{"nodes": <root>, "groups": [...]}`; older files are the
/// bare root object. `groups` is a visual concern and is carried opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphDocument {
    Wrapped {
        nodes: NodeDocument,
        #[serde(default)]
        groups: Vec<serde_json::Value>,
    },
    Bare(NodeDocument),
}

impl GraphDocument {
    pub fn new(root: NodeDocument, groups: Vec<serde_json::Value>) -> Self {
        GraphDocument::Wrapped { nodes: root, groups }
    }

    pub fn root(&self) -> &NodeDocument {
        match self {
            GraphDocument::Wrapped { nodes, .. } => nodes,
            GraphDocument::Bare(nodes) => nodes,
        }
    }

    pub fn groups(&self) -> &[serde_json::Value] {
        match self {
            GraphDocument::Wrapped { groups, .. } => groups,
            GraphDocument::Bare(_) => &[],
        }
    }
}
