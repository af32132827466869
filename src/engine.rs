//! The execution engine: a depth-first, pre-order walk over a graph tree
//! that dispatches each node's bound command, threads the data block by the
//! propagate policy, and records per-node results.
//!
//! The walk is driven by an explicit work stack rather than host recursion,
//! so graph depth is bounded by memory, not the call stack. Ordering is
//! identical to the recursive formulation: children run in insertion order,
//! a node's subtree is pruned on error or skip, and strict mode turns any
//! error anywhere into a whole-run stop.

use crate::command::{CommandOutput, DataBlock};
use crate::error::CommandError;
use crate::graph::{GraphTree, NodeId};
use crate::outcome::{Outcome, Status};
use crate::registry::CommandRegistry;
use itertools::Itertools;
use std::cell::RefCell;
use std::error::Error as StdError;
use std::rc::Rc;

/// Shared handle to one branch's data block.
///
/// With propagation on, every frame holds the same handle and mutations are
/// visible run-wide; with propagation off, each node entry clones the map
/// into a fresh handle, isolating its branch.
type BlockHandle = Rc<RefCell<DataBlock>>;

struct Frame {
    node: NodeId,
    block: BlockHandle,
}

/// Walks one graph, one node at a time. Single-threaded and synchronous; a
/// command that never returns hangs the run.
pub struct Engine<'r> {
    registry: &'r CommandRegistry,
    strict: bool,
    propagate: bool,
    visited: Vec<NodeId>,
}

impl<'r> Engine<'r> {
    pub fn new(registry: &'r CommandRegistry, strict: bool, propagate: bool) -> Self {
        Self {
            registry,
            strict,
            propagate,
            visited: Vec::new(),
        }
    }

    /// Every non-router node processed so far, in traversal order.
    pub fn visited(&self) -> &[NodeId] {
        &self.visited
    }

    /// Runs the whole graph from its root with the given seed block.
    ///
    /// Nodes are annotated in place; the returned slice is the run report
    /// ordering. Calling this again resets the previous run's annotations.
    pub fn run(&mut self, graph: &mut GraphTree, seed: DataBlock) -> &[NodeId] {
        self.visited.clear();
        graph.set_clean();

        let mut stack = vec![Frame {
            node: graph.root(),
            block: Rc::new(RefCell::new(seed)),
        }];

        while let Some(frame) = stack.pop() {
            // Strict mode is a whole-run kill switch: once any visited node
            // has failed, nothing further is processed on any branch.
            if self.strict && self.any_failed(graph) {
                tracing::error!("Operation stopped, a node has failed");
                break;
            }
            self.step(graph, frame, &mut stack);
        }

        tracing::info!(
            "Finished walk: [{}]",
            self.visited
                .iter()
                .map(|&id| graph.node(id).name.as_str())
                .join(", ")
        );
        &self.visited
    }

    fn any_failed(&self, graph: &GraphTree) -> bool {
        self.visited.iter().any(|&id| graph.node(id).error)
    }

    fn step(&mut self, graph: &mut GraphTree, frame: Frame, stack: &mut Vec<Frame>) {
        let Frame { node, block } = frame;

        let name = graph.node(node).name.clone();
        tracing::info!("Running: {}", name);
        graph
            .node_mut(node)
            .messages
            .push(format!("{}'s report:", name));

        let branch: BlockHandle = if self.propagate {
            block
        } else {
            Rc::new(RefCell::new(block.borrow().clone()))
        };

        // Routers forward the branch untouched and stay out of the report.
        let Some(command_key) = graph.node(node).command.clone() else {
            for &child in graph.node(node).children.iter().rev() {
                stack.push(Frame {
                    node: child,
                    block: Rc::clone(&branch),
                });
            }
            return;
        };

        let dispatched = match self.registry.resolve(&command_key) {
            Some(command) => command.run(&mut branch.borrow_mut()),
            None => Err(CommandError::Unknown {
                command: command_key.clone(),
            }),
        };

        let output = match dispatched {
            Ok(output) => output,
            Err(err) => {
                let diagnostics = vec![
                    format!("Failed module: {}", command_key),
                    render_error_chain(&err),
                ];
                for line in &diagnostics {
                    tracing::error!("{}", line);
                }
                CommandOutput::Signal(synthesize_failure(&name, &branch, &diagnostics))
            }
        };

        // A node counts as processed from here on, even if it failed.
        self.visited.push(node);

        match output {
            CommandOutput::Signal(outcome) => {
                let (status, messages, errors) = outcome.into_parts();
                let dump = pretty_block(&branch);
                let record = graph.node_mut(node);
                record.messages.extend(messages);
                record.error_records = errors;

                match status {
                    Status::Error => {
                        record.error = true;
                        tracing::error!("Error running: {}", record.name);
                        tracing::error!("{}", dump);
                        for line in &record.messages {
                            tracing::error!("{}", line);
                        }
                        if self.strict {
                            record.messages.push("Operation stopped".to_string());
                        }
                    }
                    Status::Skip => {
                        record.skip = true;
                        record.messages.push("Skipped".to_string());
                        for line in &record.messages {
                            tracing::warn!("{}", line);
                        }
                    }
                }
                // Error and skip both prune this node's subtree.
            }
            CommandOutput::Continue => {
                graph.node_mut(node).messages.push("Success".to_string());
                for &child in graph.node(node).children.iter().rev() {
                    stack.push(Frame {
                        node: child,
                        block: Rc::clone(&branch),
                    });
                }
            }
            CommandOutput::Replace(new_block) => {
                graph.node_mut(node).messages.push("Success".to_string());
                // The replacement is homed onto a fresh handle: this node's
                // children see it, siblings keep the branch they were given.
                let replacement = Rc::new(RefCell::new(new_block));
                for &child in graph.node(node).children.iter().rev() {
                    stack.push(Frame {
                        node: child,
                        block: Rc::clone(&replacement),
                    });
                }
            }
        }
    }
}

/// Builds the synthetic error outcome for a failed dispatch: what the node
/// produced, the block it was given, and the captured diagnostics.
fn synthesize_failure(name: &str, branch: &BlockHandle, diagnostics: &[String]) -> Outcome {
    let mut outcome = Outcome::error();
    outcome.add_message(format!("{} returned no result", name));
    outcome.add_message(pretty_block(branch));
    outcome.add_message("Created new error instance.");
    if diagnostics.is_empty() {
        outcome.add_message("No exception message");
    }
    for line in diagnostics {
        outcome.add_message(line);
    }
    outcome
}

/// Formats an error with its full source chain, one cause per line.
fn render_error_chain(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(&format!("\ncaused by: {}", cause));
        source = cause.source();
    }
    rendered
}

fn pretty_block(branch: &BlockHandle) -> String {
    serde_json::to_string_pretty(&*branch.borrow())
        .unwrap_or_else(|_| "<unprintable data block>".to_string())
}
