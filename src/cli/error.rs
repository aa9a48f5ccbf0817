//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        let CliError::Application(e) = self;
        match e {
            ApplicationError::NoCommand { .. }
            | ApplicationError::UnknownCommand { .. }
            | ApplicationError::InvalidArguments { .. } => crate::exitcode::USAGE,
            ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            ApplicationError::Binding(_) | ApplicationError::Spec(_) => crate::exitcode::SOFTWARE,
            ApplicationError::Collaborator { source, .. } => {
                match source.downcast_ref::<InfraError>() {
                    Some(InfraError::Io { .. }) => crate::exitcode::UNAVAILABLE,
                    Some(infra) => infra.exit_code().unwrap_or(crate::exitcode::SOFTWARE),
                    None => crate::exitcode::SOFTWARE,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArgError;

    #[test]
    fn test_usage_errors_map_to_usage() {
        let err = CliError::from(ApplicationError::UnknownCommand {
            name: "bogus".into(),
            available: vec!["info"],
        });
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);

        let err = CliError::from(ApplicationError::InvalidArguments {
            prog: "spacy link".into(),
            usage: String::new(),
            source: ArgError::MissingArgument { name: "origin" },
        });
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn test_interpreter_status_is_propagated() {
        let infra = InfraError::Interpreter {
            operation: "train",
            message: "python3 exited with status 3".into(),
            exit_code: Some(3),
        };
        let err = CliError::from(ApplicationError::collaborator("train", Box::new(infra)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_opaque_collaborator_error_is_software() {
        let err = CliError::from(ApplicationError::collaborator("link", "link exists".into()));
        assert_eq!(err.exit_code(), crate::exitcode::SOFTWARE);
    }
}
