//! Command registry: name to command lookup
//!
//! Built once before dispatch and only read afterwards.

use tracing::debug;

use crate::application::command::CommandSpec;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{validate_params, SpecError};

/// Commands in registration order.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command after checking its declaration.
    ///
    /// # Errors
    /// [`SpecError::DuplicateCommand`] if the name is taken, or any violation
    /// reported by [`validate_params`].
    pub fn register(&mut self, spec: CommandSpec) -> Result<(), SpecError> {
        if self.get(spec.name).is_some() {
            return Err(SpecError::DuplicateCommand(spec.name.to_string()));
        }
        validate_params(spec.name, &spec.params)?;
        debug!(command = spec.name, params = spec.params.len(), "registered");
        self.commands.push(spec);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Look up a command by exact name.
    ///
    /// # Errors
    /// [`ApplicationError::UnknownCommand`] with the sorted known names.
    pub fn resolve(&self, name: &str) -> ApplicationResult<&CommandSpec> {
        self.get(name).ok_or_else(|| ApplicationError::UnknownCommand {
            name: name.to_string(),
            available: self.names(),
        })
    }

    /// Command names sorted alphabetically.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
