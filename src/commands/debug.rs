use crate::command::{Command, CommandOutput, DataBlock};
use crate::error::CommandError;
use crate::outcome::{ErrorRecord, Outcome};
use crate::registry::CommandRegistry;

/// `debug.invokeError`: signals an error outcome carrying a representative
/// spread of error records, from fully specified down to item-only.
struct InvokeError;

impl Command for InvokeError {
    fn key(&self) -> &str {
        "debug.invokeError"
    }

    fn run(&self, _block: &mut DataBlock) -> Result<CommandOutput, CommandError> {
        tracing::info!("{}", self.key());
        tracing::error!("Simulating an error");

        let outcome = Outcome::error()
            .with_error(
                ErrorRecord::new("broken_node")
                    .with_kind("mesh")
                    .with_reason("this is a dummy error, example of a full record"),
            )
            .with_error(
                ErrorRecord::new("missing_object")
                    .with_reason("you can just add item and no type or reason"),
            )
            .with_error(ErrorRecord::new("no_type").with_reason("this one has no type"))
            .with_error(ErrorRecord::new("item_only_specified"))
            .with_message("You can use the errors for selection, repair, etc");

        Ok(CommandOutput::Signal(outcome))
    }
}

/// `debug.invokeSkip`: signals a skip so the down-stream graph is not run.
struct InvokeSkip;

impl Command for InvokeSkip {
    fn key(&self) -> &str {
        "debug.invokeSkip"
    }

    fn run(&self, _block: &mut DataBlock) -> Result<CommandOutput, CommandError> {
        tracing::info!("{}", self.key());
        tracing::warn!("Simulating a skip...");

        Ok(CommandOutput::Signal(
            Outcome::skip().with_message("This is an example skip node..."),
        ))
    }
}

/// `debug.changeWhy`: overwrites the `why` entry; with propagation on, every
/// node visited afterwards sees the new value.
struct ChangeWhy;

impl Command for ChangeWhy {
    fn key(&self) -> &str {
        "debug.changeWhy"
    }

    fn run(&self, block: &mut DataBlock) -> Result<CommandOutput, CommandError> {
        block.insert(
            "why".to_string(),
            serde_json::Value::String("Helping people bring out the best in themselves.".into()),
        );
        tracing::info!("{}", self.key());
        Ok(CommandOutput::Continue)
    }
}

/// `debug.debugDatablock`: dumps the block at debug level and continues.
struct DebugDatablock;

impl Command for DebugDatablock {
    fn key(&self) -> &str {
        "debug.debugDatablock"
    }

    fn run(&self, block: &mut DataBlock) -> Result<CommandOutput, CommandError> {
        let dump = serde_json::to_string_pretty(block)
            .map_err(|e| CommandError::failed(format!("Data block is not serializable: {}", e)))?;
        tracing::debug!("{}", self.key());
        tracing::debug!("{}", dump);
        Ok(CommandOutput::Continue)
    }
}

pub(super) fn register(registry: &mut CommandRegistry) {
    registry.register(Box::new(InvokeError));
    registry.register(Box::new(InvokeSkip));
    registry.register(Box::new(ChangeWhy));
    registry.register(Box::new(DebugDatablock));
}
