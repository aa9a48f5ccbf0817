//! Command descriptors: a name, its parameters and the handler they feed

use std::fmt;

use crate::application::collaborators::Collaborators;
use crate::application::ApplicationResult;
use crate::domain::{ParamSpec, ParsedArguments};

/// Handler invoked with the coerced arguments of its command.
pub type Handler = fn(&ParsedArguments, &dyn Collaborators) -> ApplicationResult<()>;

/// A registered command.
#[derive(Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    /// Description shown in help output.
    pub about: &'static str,
    /// Parameters in declaration order; positionals come first.
    pub params: Vec<ParamSpec>,
    pub handler: Handler,
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl CommandSpec {
    pub fn new(name: &'static str, about: &'static str, handler: Handler) -> Self {
        Self {
            name,
            about,
            params: Vec::new(),
            handler,
        }
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn param_named(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }
}
