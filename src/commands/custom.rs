use crate::command::{Command, CommandOutput, DataBlock};
use crate::error::CommandError;
use crate::registry::CommandRegistry;

/// The `custom.process<Key>` family: each unit reads one well-known entry
/// from the block and logs it, raising when the entry is absent. Handy for
/// exercising both the success path and the engine's failure normalization.
struct ProcessKey {
    command: &'static str,
    field: &'static str,
}

impl Command for ProcessKey {
    fn key(&self) -> &str {
        self.command
    }

    fn run(&self, block: &mut DataBlock) -> Result<CommandOutput, CommandError> {
        let value = block
            .get(self.field)
            .ok_or_else(|| CommandError::MissingKey(self.field.to_string()))?;
        tracing::info!("{}", self.command);
        tracing::info!("{}", value);
        Ok(CommandOutput::Continue)
    }
}

pub(super) fn register(registry: &mut CommandRegistry) {
    for (command, field) in [
        ("custom.processWho", "who"),
        ("custom.processWhat", "what"),
        ("custom.processWhere", "where"),
        ("custom.processWhen", "when"),
        ("custom.processWhy", "why"),
    ] {
        registry.register(Box::new(ProcessKey { command, field }));
    }
}
