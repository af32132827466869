//! # Nagare - Node-Graph Execution Engine
//!
//! **Nagare** is the headless execution engine behind a node-graph authoring
//! tool: an editor saves a directed tree of named, command-bound nodes as
//! JSON, and this crate replays it, dispatching each node's unit of work,
//! threading a shared or branch-copied data block through the walk, and
//! collecting a per-node run report a viewer can render.
//!
//! ## Core Workflow
//!
//! 1. **Register commands**: populate a [`registry::CommandRegistry`] with
//!    the units of work your graphs can bind to. The built-in `basic.*`,
//!    `custom.*` and `debug.*` modules come with
//!    [`registry::CommandRegistry::with_defaults`]; host applications
//!    register their own on top.
//! 2. **Build a session**: use [`session::RunSession::builder`] to pick the
//!    two run policies, `strict` (any failure stops the whole run) and
//!    `propagate` (one shared data block vs. per-branch copies).
//! 3. **Run**: hand the session a graph file, a JSON string, or an
//!    already-built [`graph::GraphTree`], plus the seed data block.
//! 4. **Render**: the returned [`report::RunReport`] lists every processed
//!    node in traversal order with its messages, error records, and flags;
//!    it can be persisted as a binary artifact for a separate viewer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nagare::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Commands the graph can bind to.
//!     let mut registry = CommandRegistry::with_defaults();
//!     registry.register_fn("demo.tag", |block| {
//!         block.insert("tagged".to_string(), serde_json::json!(true));
//!         Ok(CommandOutput::Continue)
//!     });
//!
//!     // 2. Policies for this run.
//!     let session = RunSession::builder(registry)
//!         .strict(false)
//!         .propagate(true)
//!         .build();
//!
//!     // 3. Seed block and run.
//!     let mut block = DataBlock::new();
//!     block.insert("who".to_string(), serde_json::json!("somebody"));
//!     let report = session.run_file("graphs/example.json", block)?;
//!
//!     // 4. Inspect the results.
//!     for node in &report.nodes {
//!         let state = if node.error {
//!             "ERROR"
//!         } else if node.skip {
//!             "skipped"
//!         } else {
//!             "ok"
//!         };
//!         println!("{:<24} {}", node.name, state);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Nodes without a command are routers: they forward the data block to their
//! children unchanged and never appear in the report. A command signals
//! failure or an intentional skip by returning an [`outcome::Outcome`]; both
//! prune the node's subtree, and in strict mode an error stops every branch
//! of the run.

pub mod command;
pub mod commands;
pub mod engine;
pub mod error;
pub mod graph;
pub mod outcome;
pub mod prelude;
pub mod registry;
pub mod report;
pub mod session;
