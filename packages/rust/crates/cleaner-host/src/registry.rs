//! Command table keyed by command id.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::error::HostError;
use crate::host::EditorHost;

/// A registered command body.
pub type CommandHandler = Box<dyn Fn(&mut dyn EditorHost) -> Result<(), HostError>>;

/// Registered commands, iterated in id order.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: BTreeMap<String, CommandHandler>,
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.command_ids())
            .finish()
    }
}

impl CommandRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `id`.
    ///
    /// # Errors
    /// [`HostError::DuplicateCommand`] if `id` is taken.
    pub fn register<F>(&mut self, id: impl Into<String>, handler: F) -> Result<(), HostError>
    where
        F: Fn(&mut dyn EditorHost) -> Result<(), HostError> + 'static,
    {
        let id = id.into();
        if self.handlers.contains_key(&id) {
            return Err(HostError::DuplicateCommand(id));
        }
        debug!(command = %id, "registered command");
        self.handlers.insert(id, Box::new(handler));
        Ok(())
    }

    /// Remove the handler for `id`. Returns whether one was registered.
    pub fn unregister(&mut self, id: &str) -> bool {
        let removed = self.handlers.remove(id).is_some();
        if removed {
            debug!(command = id, "unregistered command");
        }
        removed
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    /// Registered ids in sorted order.
    #[must_use]
    pub fn command_ids(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the command `id` against `host`.
    ///
    /// # Errors
    /// [`HostError::UnknownCommand`] for unregistered ids, otherwise whatever
    /// the handler returns.
    pub fn execute(&self, id: &str, host: &mut dyn EditorHost) -> Result<(), HostError> {
        let handler = self
            .handlers
            .get(id)
            .ok_or_else(|| HostError::UnknownCommand(id.to_string()))?;
        debug!(command = id, "executing command");
        handler(host)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::host::MemoryHost;

    #[test]
    fn test_register_and_execute() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut registry = CommandRegistry::new();
        registry
            .register("demo", move |_host| {
                counter.set(counter.get() + 1);
                Ok(())
            })
            .expect("register");

        let mut host = MemoryHost::new();
        registry.execute("demo", &mut host).expect("execute");
        registry.execute("demo", &mut host).expect("execute");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let mut registry = CommandRegistry::new();
        registry.register("demo", |_| Ok(())).expect("register");
        assert_eq!(
            registry.register("demo", |_| Ok(())),
            Err(HostError::DuplicateCommand("demo".to_string()))
        );
    }

    #[test]
    fn test_unknown_command() {
        let registry = CommandRegistry::new();
        let mut host = MemoryHost::new();
        assert_eq!(
            registry.execute("missing", &mut host),
            Err(HostError::UnknownCommand("missing".to_string()))
        );
    }

    #[test]
    fn test_unregister() {
        let mut registry = CommandRegistry::new();
        registry.register("demo", |_| Ok(())).expect("register");
        assert!(registry.unregister("demo"));
        assert!(!registry.unregister("demo"));
        assert!(registry.is_empty());
    }
}
