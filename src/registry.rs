use crate::command::{Command, CommandOutput, DataBlock, FnCommand};
use crate::error::CommandError;
use ahash::AHashMap;

/// Lookup from dotted command keys to executable units.
///
/// The engine depends only on [`CommandRegistry::resolve`]; how the registry
/// gets populated (built-ins, module discovery, test closures) is the
/// caller's concern.
pub struct CommandRegistry {
    commands: AHashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            commands: AHashMap::new(),
        }
    }

    /// A registry pre-populated with the built-in `basic.*`, `debug.*` and
    /// `custom.*` units.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        crate::commands::register_defaults(&mut registry);
        registry
    }

    /// Registers a command under its own key, replacing any previous entry.
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.key().to_string(), command);
    }

    /// Registers a closure under the given key.
    pub fn register_fn<F>(&mut self, key: impl Into<String>, func: F)
    where
        F: Fn(&mut DataBlock) -> Result<CommandOutput, CommandError> + Send + Sync + 'static,
    {
        self.register(Box::new(FnCommand::new(key, func)));
    }

    pub fn resolve(&self, key: &str) -> Option<&dyn Command> {
        self.commands.get(key).map(|c| c.as_ref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.commands.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
