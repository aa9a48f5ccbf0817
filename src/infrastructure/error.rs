//! Infrastructure-level errors: process launching and the interpreter bridge

use thiserror::Error;

/// Errors raised while running a collaborator out of process.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    Interpreter {
        operation: &'static str,
        message: String,
        exit_code: Option<i32>,
    },

    #[error("cannot encode arguments: {0}")]
    Encode(#[from] serde_json::Error),
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Exit status reported by the interpreter, if it ran.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Interpreter { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
