//! Application-level errors (wraps domain errors)

use itertools::Itertools;
use thiserror::Error;

use crate::domain::{ArgError, SpecError};

/// Boxed error returned by a collaborator; treated as opaque.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Application errors wrap domain errors and add dispatch-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Available commands: {}", .available.iter().join(", "))]
    NoCommand { available: Vec<&'static str> },

    #[error("Unknown command: {name}. Available: {}", .available.iter().join(", "))]
    UnknownCommand {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("{prog}: error: {source}")]
    InvalidArguments {
        prog: String,
        usage: String,
        #[source]
        source: ArgError,
    },

    /// A handler read its arguments with the wrong name or type.
    #[error("{0}")]
    Binding(#[from] ArgError),

    #[error("{0}")]
    Spec(#[from] SpecError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("{operation} failed: {source}")]
    Collaborator {
        operation: &'static str,
        #[source]
        source: BoxError,
    },
}

impl ApplicationError {
    pub fn collaborator(operation: &'static str, source: BoxError) -> Self {
        Self::Collaborator { operation, source }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
