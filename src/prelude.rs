//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the nagare crate. Import
//! this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use nagare::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let registry = CommandRegistry::with_defaults();
//! let session = RunSession::builder(registry).strict(true).build();
//!
//! let mut block = DataBlock::new();
//! block.insert("who".to_string(), serde_json::json!("somebody"));
//!
//! let report = session.run_file("path/to/graph.json", block)?;
//! for node in &report.nodes {
//!     println!("{}: error={} skip={}", node.name, node.error, node.skip);
//! }
//! # Ok(())
//! # }
//! ```

// Core execution
pub use crate::engine::Engine;
pub use crate::session::{RunSession, RunSessionBuilder};

// Command contract
pub use crate::command::{Command, CommandOutput, DataBlock, FnCommand};
pub use crate::registry::CommandRegistry;

// Result signals
pub use crate::outcome::{ErrorRecord, Outcome, Status};

// Graph model and persistence
pub use crate::graph::{GraphDocument, GraphTree, NodeDocument, NodeId, NodeRecord, NodeRef, loader};

// Run reports
pub use crate::report::{NodeReport, RunReport};

// Error types
pub use crate::error::{CommandError, GraphLoadError, ReportError, SessionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
