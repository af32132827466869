use crate::command::{Command, CommandOutput, DataBlock};
use crate::error::CommandError;
use crate::registry::CommandRegistry;

/// `basic.printDatablock`: logs a pretty dump of the block and continues.
struct PrintDatablock;

impl Command for PrintDatablock {
    fn key(&self) -> &str {
        "basic.printDatablock"
    }

    fn run(&self, block: &mut DataBlock) -> Result<CommandOutput, CommandError> {
        let dump = serde_json::to_string_pretty(block)
            .map_err(|e| CommandError::failed(format!("Data block is not serializable: {}", e)))?;
        tracing::info!("{}", self.key());
        tracing::info!("{}", dump);
        Ok(CommandOutput::Continue)
    }
}

/// `basic.echo`: does nothing and continues; useful for wiring checks.
struct Echo;

impl Command for Echo {
    fn key(&self) -> &str {
        "basic.echo"
    }

    fn run(&self, _block: &mut DataBlock) -> Result<CommandOutput, CommandError> {
        tracing::info!("{}", self.key());
        Ok(CommandOutput::Continue)
    }
}

pub(super) fn register(registry: &mut CommandRegistry) {
    registry.register(Box::new(PrintDatablock));
    registry.register(Box::new(Echo));
}
