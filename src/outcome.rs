use crate::error::InvalidStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Terminal statuses a command can signal instead of continuing the walk.
///
/// There is no success status: a successful command simply hands the data
/// block back and the walk descends into the node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Error,
    Skip,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Error => write!(f, "error"),
            Status::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for Status {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Status::Error),
            "skip" => Ok(Status::Skip),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

/// Structured description of one failed item inside an error outcome.
///
/// `item` is required; `kind` and `reason` default to empty strings. The wire
/// name of `kind` is `"type"`, matching the persisted report format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub item: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub reason: String,
}

impl ErrorRecord {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            kind: String::new(),
            reason: String::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Builds a record from an untyped mapping, requiring an `"item"` entry.
    /// Returns `None` when the mapping has no usable item.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let item = value.get("item")?.as_str()?;
        let kind = value.get("type").and_then(|v| v.as_str()).unwrap_or("");
        let reason = value.get("reason").and_then(|v| v.as_str()).unwrap_or("");
        Some(Self {
            item: item.to_string(),
            kind: kind.to_string(),
            reason: reason.to_string(),
        })
    }
}

/// Result signal a command returns to flag an error or an intentional skip.
///
/// Created by a command, consumed exactly once by the engine: its messages and
/// error records are copied onto the owning node record, then it is discarded.
#[derive(Debug, Clone)]
pub struct Outcome {
    status: Status,
    messages: Vec<String>,
    errors: Vec<ErrorRecord>,
}

impl Outcome {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            messages: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn error() -> Self {
        Self::new(Status::Error)
    }

    pub fn skip() -> Self {
        Self::new(Status::Skip)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Appends a human-readable message, prefixed with `" - "` so downstream
    /// renderers can tell command messages from engine annotations.
    pub fn add_message(&mut self, message: impl fmt::Display) {
        self.messages.push(format!(" - {}", message));
    }

    /// Builder-style variant of [`Outcome::add_message`].
    pub fn with_message(mut self, message: impl fmt::Display) -> Self {
        self.add_message(message);
        self
    }

    pub fn add_error(&mut self, record: ErrorRecord) {
        self.errors.push(record);
    }

    pub fn with_error(mut self, record: ErrorRecord) -> Self {
        self.add_error(record);
        self
    }

    /// Appends an error record parsed from an untyped mapping. A mapping
    /// without an `"item"` entry is logged and dropped, never fatal.
    pub fn add_error_value(&mut self, value: &serde_json::Value) {
        match ErrorRecord::from_value(value) {
            Some(record) => self.errors.push(record),
            None => tracing::warn!("Item not specified in error: {}", value),
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    /// Consumes the outcome, handing its contents to the engine.
    pub(crate) fn into_parts(self) -> (Status, Vec<String>, Vec<ErrorRecord>) {
        (self.status, self.messages, self.errors)
    }
}
