use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while loading, linking, or saving a graph document.
#[derive(Error, Debug)]
pub enum GraphLoadError {
    #[error("Failed to access graph file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse graph JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error(
        "Node '{name}' ({uuid}) is wired from '{source_name}' but was not found in the document"
    )]
    NodeNotFound {
        name: String,
        uuid: Uuid,
        source_name: String,
    },

    #[error(
        "Node '{name}' ({uuid}) appears more than once; a name+uuid pair must identify one node"
    )]
    DuplicateNode { name: String, uuid: Uuid },
}

/// Errors a command implementation can raise during dispatch.
///
/// The engine catches every variant and normalizes it into a synthetic error
/// outcome on the owning node; these never cross the traversal boundary.
#[derive(Error, Debug, Clone)]
pub enum CommandError {
    #[error("No command registered for key '{command}'")]
    Unknown { command: String },

    #[error("Required key '{0}' is missing from the data block")]
    MissingKey(String),

    #[error("Invalid value under key '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("{0}")]
    Failed(String),
}

impl CommandError {
    /// Shorthand for a freeform command failure.
    pub fn failed(message: impl Into<String>) -> Self {
        CommandError::Failed(message.into())
    }
}

/// Error raised when parsing a status tag from its string form.
#[derive(Error, Debug, Clone)]
#[error("Invalid status: {0}")]
pub struct InvalidStatus(pub String);

/// Errors that can occur while persisting or restoring a run report artifact.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report serialization failed: {0}")]
    Encode(String),

    #[error("Report deserialization failed: {0}")]
    Decode(String),

    #[error("Could not access report file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced to the caller of a run session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Load(#[from] GraphLoadError),
}
