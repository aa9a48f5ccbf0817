//! Dispatcher: selects a command, coerces its arguments and runs its handler
//!
//! One dispatch walks `Idle → CommandSelected → ArgumentsParsed → Invoked`
//! and ends in success or the first error. Nothing is retried.

use tracing::{debug, info, instrument};

use crate::application::collaborators::Collaborators;
use crate::application::registry::CommandRegistry;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{coerce_arguments, render_help, usage_line, wants_help};

/// How a successful dispatch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The handler ran to completion.
    Completed { command: &'static str },
    /// Help was requested; the text is ready to print.
    Help { command: &'static str, text: String },
}

pub struct Dispatcher<'a> {
    registry: &'a CommandRegistry,
    collaborators: &'a dyn Collaborators,
    program: String,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        registry: &'a CommandRegistry,
        collaborators: &'a dyn Collaborators,
        program: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            collaborators,
            program: program.into(),
        }
    }

    /// Program identity as shown while `command` is active.
    pub fn prog_for(&self, command: &str) -> String {
        format!("{} {}", self.program, command)
    }

    /// Run one command. `args` excludes the program name.
    ///
    /// # Errors
    /// - [`ApplicationError::NoCommand`] if `args` is empty
    /// - [`ApplicationError::UnknownCommand`] if the first argument is not registered
    /// - [`ApplicationError::InvalidArguments`] if the remaining tokens do not fit
    /// - whatever the handler reports, unchanged
    #[instrument(level = "debug", skip(self))]
    pub fn dispatch<S: AsRef<str> + std::fmt::Debug>(&self, args: &[S]) -> ApplicationResult<Outcome> {
        let Some((command, rest)) = args.split_first() else {
            debug!(state = "idle", "no command given");
            return Err(ApplicationError::NoCommand {
                available: self.registry.names(),
            });
        };
        let command = command.as_ref();
        let prog = self.prog_for(command);
        debug!(state = "command_selected", %prog);

        let spec = self.registry.resolve(command)?;

        if wants_help(&spec.params, rest) {
            return Ok(Outcome::Help {
                command: spec.name,
                text: render_help(&prog, spec.about, &spec.params),
            });
        }

        let parsed = coerce_arguments(&spec.params, rest).map_err(|source| {
            ApplicationError::InvalidArguments {
                usage: usage_line(&prog, &spec.params),
                prog: prog.clone(),
                source,
            }
        })?;
        debug!(state = "arguments_parsed", ?parsed);

        info!(command = spec.name, "invoking handler");
        (spec.handler)(&parsed, self.collaborators)?;
        debug!(state = "invoked", command = spec.name, "handler returned");

        Ok(Outcome::Completed { command: spec.name })
    }
}
