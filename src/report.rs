use crate::error::ReportError;
use crate::graph::{GraphTree, NodeId};
use crate::outcome::ErrorRecord;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// One processed node in the shape a results viewer consumes.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NodeReport {
    pub name: String,
    pub uuid: Uuid,
    pub messages: Vec<String>,
    pub error_records: Vec<ErrorRecord>,
    pub error: bool,
    pub skip: bool,
}

/// Ordered results of one run: every non-router node touched, in the exact
/// order the walk processed them.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RunReport {
    pub nodes: Vec<NodeReport>,
}

impl RunReport {
    /// Snapshots the visited nodes of a finished walk.
    pub(crate) fn from_walk(graph: &GraphTree, visited: &[NodeId]) -> Self {
        let nodes = visited
            .iter()
            .map(|&id| {
                let record = graph.node(id);
                NodeReport {
                    name: record.name.clone(),
                    uuid: record.uuid,
                    messages: record.messages.clone(),
                    error_records: record.error_records.clone(),
                    error: record.error,
                    skip: record.skip,
                }
            })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn failed(&self) -> impl Iterator<Item = &NodeReport> {
        self.nodes.iter().filter(|n| n.error)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &NodeReport> {
        self.nodes.iter().filter(|n| n.skip)
    }

    /// True when no node errored or skipped.
    pub fn is_clean(&self) -> bool {
        self.nodes.iter().all(|n| !n.error && !n.skip)
    }

    /// Encodes the report with the bincode standard configuration.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReportError> {
        encode_to_vec(self, standard()).map_err(|e| ReportError::Encode(e.to_string()))
    }

    /// Decodes a report from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        decode_from_slice(bytes, standard())
            .map(|(report, _)| report)
            .map_err(|e| ReportError::Decode(e.to_string()))
    }

    /// Saves the report artifact so a viewer can render it later.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        fs::write(path, bytes).map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads a previously saved report artifact.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }
}
