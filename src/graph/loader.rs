//! JSON persistence for graph trees.
//!
//! The on-disk format is produced by the external editor; this module only
//! decodes it into a linked [`GraphTree`] and re-encodes trees on save. All
//! parent/child wiring is reconstructed from the name+uuid pairs embedded in
//! `out_nodes`/`in_node`, never from nesting identity alone.

use crate::error::GraphLoadError;
use crate::graph::document::{GraphDocument, NodeDocument, NodeRef};
use crate::graph::node::{GraphTree, NodeId, NodeRecord};
use ahash::AHashMap;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Reads and links a graph from a JSON file.
pub fn load_file(path: impl AsRef<Path>) -> Result<GraphTree, GraphLoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| GraphLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_str(&json)
}

/// Parses and links a graph from a JSON string.
pub fn from_str(json: &str) -> Result<GraphTree, GraphLoadError> {
    let document: GraphDocument = serde_json::from_str(json)?;
    from_document(&document)
}

/// Links a decoded document into an executable tree.
pub fn from_document(document: &GraphDocument) -> Result<GraphTree, GraphLoadError> {
    // Flatten the nested document into the arena, registering every
    // name+uuid pair. Pre-order, so a parent always lands before its kids.
    let mut records: Vec<NodeRecord> = Vec::new();
    let mut docs: Vec<&NodeDocument> = Vec::new();
    let mut index: AHashMap<(String, Uuid), NodeId> = AHashMap::new();

    let mut stack: Vec<&NodeDocument> = vec![document.root()];
    while let Some(doc) = stack.pop() {
        let id = records.len();
        if index.insert((doc.name.clone(), doc.uuid), id).is_some() {
            return Err(GraphLoadError::DuplicateNode {
                name: doc.name.clone(),
                uuid: doc.uuid,
            });
        }
        records.push(NodeRecord::from_document(doc));
        docs.push(doc);
        for child in doc.out_nodes.iter().rev() {
            stack.push(child);
        }
    }

    // Wire children through pair lookups, in out_nodes order.
    for (id, doc) in docs.iter().enumerate() {
        for out in &doc.out_nodes {
            let child = *index.get(&(out.name.clone(), out.uuid)).ok_or_else(|| {
                GraphLoadError::NodeNotFound {
                    name: out.name.clone(),
                    uuid: out.uuid,
                    source_name: doc.name.clone(),
                }
            })?;
            records[child].parent = Some(id);
            records[id].children.push(child);
        }
    }

    // A stale in_node reference is not fatal, the pair wiring above wins.
    for (id, doc) in docs.iter().enumerate() {
        if let Some(node_in) = &doc.in_node {
            let matches = records[id]
                .parent
                .is_some_and(|p| records[p].name == node_in.name && records[p].uuid == node_in.uuid);
            if !matches {
                tracing::warn!(
                    "in_node of '{}' does not match its wired parent, ignoring",
                    doc.name
                );
            }
        }
    }

    Ok(GraphTree::from_parts(records, 0, document.groups().to_vec()))
}

/// Re-encodes a tree as a persistable document.
pub fn to_document(tree: &GraphTree) -> GraphDocument {
    GraphDocument::new(build_node(tree, tree.root()), tree.groups().to_vec())
}

fn build_node(tree: &GraphTree, id: NodeId) -> NodeDocument {
    let record = tree.node(id);
    NodeDocument {
        name: record.name.clone(),
        class_name: record.class_name.clone(),
        icon: record.icon.clone(),
        description: record.description.clone(),
        command: record.command.clone(),
        x: record.x,
        y: record.y,
        uuid: record.uuid,
        out_nodes: record
            .children
            .iter()
            .map(|&child| build_node(tree, child))
            .collect(),
        in_node: record.parent.map(|p| NodeRef {
            name: tree.node(p).name.clone(),
            uuid: tree.node(p).uuid,
        }),
    }
}

/// Pretty-printed JSON for a tree.
pub fn to_string(tree: &GraphTree) -> Result<String, GraphLoadError> {
    Ok(serde_json::to_string_pretty(&to_document(tree))?)
}

/// Saves a tree as pretty JSON, creating missing parent directories.
pub fn save_file(tree: &GraphTree, path: impl AsRef<Path>) -> Result<(), GraphLoadError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| GraphLoadError::Io {
                path: parent.display().to_string(),
                source,
            })?;
            tracing::info!("Created new folder: {}", parent.display());
        }
    }
    let json = to_string(tree)?;
    fs::write(path, json).map_err(|source| GraphLoadError::Io {
        path: path.display().to_string(),
        source,
    })
}
