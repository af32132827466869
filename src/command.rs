use crate::error::CommandError;
use crate::outcome::Outcome;
use ahash::AHashMap;

/// The user payload threaded through a run.
///
/// No node owns it permanently: depending on the propagate flag it is either
/// shared by every node in the run or cloned per branch at each step.
pub type DataBlock = AHashMap<String, serde_json::Value>;

/// What a command hands back to the engine.
pub enum CommandOutput {
    /// Success; children continue with the block as it now stands.
    Continue,
    /// Success with a replacement block. Only this node's children see the
    /// new map; siblings keep the branch they were given.
    Replace(DataBlock),
    /// Error or skip for this branch.
    Signal(Outcome),
}

/// A unit of work a graph node binds to through its dotted command key.
///
/// Implementations mutate the branch's data block in place and report back
/// through [`CommandOutput`]. Returning `Err` is the "raised" arm of the
/// contract: the engine catches it and records a synthetic error outcome on
/// the node instead of letting it cross the traversal boundary.
pub trait Command: Send + Sync {
    /// Registry key in `"<category>.<unit>"` form.
    fn key(&self) -> &str;

    fn run(&self, block: &mut DataBlock) -> Result<CommandOutput, CommandError>;
}

type CommandFn = dyn Fn(&mut DataBlock) -> Result<CommandOutput, CommandError> + Send + Sync;

/// Adapter wrapping a closure as a [`Command`], for tests and ad-hoc units.
pub struct FnCommand {
    key: String,
    func: Box<CommandFn>,
}

impl FnCommand {
    pub fn new<F>(key: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut DataBlock) -> Result<CommandOutput, CommandError> + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            func: Box::new(func),
        }
    }
}

impl Command for FnCommand {
    fn key(&self) -> &str {
        &self.key
    }

    fn run(&self, block: &mut DataBlock) -> Result<CommandOutput, CommandError> {
        (self.func)(block)
    }
}
