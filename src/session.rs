use crate::command::DataBlock;
use crate::engine::Engine;
use crate::error::SessionError;
use crate::graph::{GraphTree, loader};
use crate::registry::CommandRegistry;
use crate::report::RunReport;
use std::path::Path;

/// Orchestrates one top-level run: load the graph, seed the data block,
/// drive the engine, and hand the ordered run report to the caller.
///
/// The session never interprets error or skip flags; rendering results is
/// the viewer collaborator's concern.
pub struct RunSession {
    registry: CommandRegistry,
    strict: bool,
    propagate: bool,
}

/// Builder for a [`RunSession`]. Defaults: strict off, propagation on.
pub struct RunSessionBuilder {
    registry: CommandRegistry,
    strict: bool,
    propagate: bool,
}

impl RunSessionBuilder {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            strict: false,
            propagate: true,
        }
    }

    /// Stop the whole run as soon as any node fails.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Share one data block across the whole run (`true`) or clone it per
    /// branch (`false`).
    pub fn propagate(mut self, propagate: bool) -> Self {
        self.propagate = propagate;
        self
    }

    pub fn build(self) -> RunSession {
        RunSession {
            registry: self.registry,
            strict: self.strict,
            propagate: self.propagate,
        }
    }
}

impl RunSession {
    pub fn builder(registry: CommandRegistry) -> RunSessionBuilder {
        RunSessionBuilder::new(registry)
    }

    /// A session with the default policies (strict off, propagation on).
    pub fn new(registry: CommandRegistry) -> Self {
        Self::builder(registry).build()
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn propagate(&self) -> bool {
        self.propagate
    }

    /// Loads a graph file and runs it with the given seed block.
    pub fn run_file(
        &self,
        path: impl AsRef<Path>,
        block: DataBlock,
    ) -> Result<RunReport, SessionError> {
        let path = path.as_ref();
        tracing::info!("Running graph: {}", path.display());
        let mut graph = loader::load_file(path)?;
        let report = self.run_graph(&mut graph, block);
        tracing::info!("Finished running graph: {}", path.display());
        Ok(report)
    }

    /// Parses a graph from a JSON string and runs it.
    pub fn run_str(&self, json: &str, block: DataBlock) -> Result<RunReport, SessionError> {
        let mut graph = loader::from_str(json)?;
        Ok(self.run_graph(&mut graph, block))
    }

    /// Runs an already-loaded tree. The tree keeps its per-node annotations
    /// afterwards; the returned report is the viewer-facing snapshot.
    pub fn run_graph(&self, graph: &mut GraphTree, block: DataBlock) -> RunReport {
        let mut engine = Engine::new(&self.registry, self.strict, self.propagate);
        engine.run(graph, block);
        RunReport::from_walk(graph, engine.visited())
    }
}
