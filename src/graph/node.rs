use crate::graph::document::NodeDocument;
use crate::outcome::ErrorRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Index of a node inside its [`GraphTree`] arena.
pub type NodeId = usize;

/// A render-agnostic snapshot of one graph node plus its run annotations.
///
/// The persisted fields mirror what the editor saves; the annotations start
/// clean and are only populated by the engine during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    pub uuid: Uuid,
    /// `None` marks a router: the node forwards its branch block unchanged
    /// and never appears in the run report.
    pub command: Option<String>,
    pub description: String,
    pub class_name: Option<String>,
    pub icon: Option<String>,
    pub x: f64,
    pub y: f64,
    pub parent: Option<NodeId>,
    /// Insertion order; determines execution order.
    pub children: Vec<NodeId>,

    pub error: bool,
    pub skip: bool,
    pub messages: Vec<String>,
    pub error_records: Vec<ErrorRecord>,
}

impl NodeRecord {
    /// A fresh record with a generated uuid, for building graphs in code.
    pub fn new(name: impl Into<String>, command: Option<&str>) -> Self {
        Self {
            name: name.into(),
            uuid: Uuid::new_v4(),
            command: command.map(str::to_string),
            description: String::new(),
            class_name: None,
            icon: None,
            x: 0.0,
            y: 0.0,
            parent: None,
            children: Vec::new(),
            error: false,
            skip: false,
            messages: Vec::new(),
            error_records: Vec::new(),
        }
    }

    pub(crate) fn from_document(doc: &NodeDocument) -> Self {
        Self {
            name: doc.name.clone(),
            uuid: doc.uuid,
            command: doc.command.clone(),
            description: doc.description.clone(),
            class_name: doc.class_name.clone(),
            icon: doc.icon.clone(),
            x: doc.x,
            y: doc.y,
            parent: None,
            children: Vec::new(),
            error: false,
            skip: false,
            messages: Vec::new(),
            error_records: Vec::new(),
        }
    }

    pub fn is_router(&self) -> bool {
        self.command.is_none()
    }

    /// Resets the run annotations back to their clean state.
    pub fn set_clean(&mut self) {
        self.error = false;
        self.skip = false;
        self.messages.clear();
        self.error_records.clear();
    }
}

/// The linked, executable form of a loaded graph: a flat arena of records
/// with index-based parent/child references and one root.
#[derive(Debug, Clone)]
pub struct GraphTree {
    records: Vec<NodeRecord>,
    root: NodeId,
    groups: Vec<serde_json::Value>,
}

impl GraphTree {
    /// A single-node tree; the record becomes the root.
    pub fn with_root(mut record: NodeRecord) -> Self {
        record.parent = None;
        record.children.clear();
        Self {
            records: vec![record],
            root: 0,
            groups: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        records: Vec<NodeRecord>,
        root: NodeId,
        groups: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            records,
            root,
            groups,
        }
    }

    /// Appends a record as the last child of `parent` and returns its id.
    pub fn add_child(&mut self, parent: NodeId, mut record: NodeRecord) -> NodeId {
        let id = self.records.len();
        record.parent = Some(parent);
        record.children.clear();
        self.records.push(record);
        self.records[parent].children.push(id);
        id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &NodeRecord {
        &self.records[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut NodeRecord {
        &mut self.records[id]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeRecord> {
        self.records.iter()
    }

    /// Opaque `groups` payload carried through from the document.
    pub fn groups(&self) -> &[serde_json::Value] {
        &self.groups
    }

    /// Looks a node up by its name+uuid pair.
    pub fn find(&self, name: &str, uuid: &Uuid) -> Option<NodeId> {
        self.records
            .iter()
            .position(|r| r.name == name && r.uuid == *uuid)
    }

    /// Ids of every node currently flagged with an error.
    pub fn failed(&self) -> Vec<NodeId> {
        (0..self.records.len())
            .filter(|&id| self.records[id].error)
            .collect()
    }

    /// Resets every node's run annotations, so the tree can be run again.
    pub fn set_clean(&mut self) {
        for record in &mut self.records {
            record.set_clean();
        }
    }
}
