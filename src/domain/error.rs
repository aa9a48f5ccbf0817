//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::ValueType;

/// Errors raised while turning raw tokens into typed arguments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgError {
    #[error("the following arguments are required: {name}")]
    MissingArgument { name: &'static str },

    #[error("argument {name}: invalid {expected} value: '{token}'")]
    Coercion {
        name: &'static str,
        expected: ValueType,
        token: String,
    },

    #[error("unrecognized option: {token}")]
    UnrecognizedOption { token: String },

    #[error("argument {name}: expected one argument after {token}")]
    MissingValue { name: &'static str, token: String },

    #[error("unrecognized arguments: {token}")]
    UnexpectedArgument { token: String },

    #[error("no parameter named '{name}' is declared")]
    UndeclaredParameter { name: String },

    #[error("parameter '{name}' does not hold a {expected} value")]
    TypeMismatch { name: String, expected: ValueType },
}

/// Violations of the rules a command declaration must obey.
///
/// These are programming errors in a command table and are detected once,
/// when the registry is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("command registered twice: {0}")]
    DuplicateCommand(String),

    #[error("command {command}: parameter declared twice: {name}")]
    DuplicateParameter {
        command: &'static str,
        name: &'static str,
    },

    #[error("command {command}: alias '{alias}' used by more than one parameter")]
    DuplicateAlias {
        command: &'static str,
        alias: String,
    },

    #[error("command {command}: positional parameter '{name}' declared after a named parameter")]
    PositionalAfterNamed {
        command: &'static str,
        name: &'static str,
    },

    #[error("command {command}: required positional '{name}' follows an optional one")]
    RequiredAfterOptional {
        command: &'static str,
        name: &'static str,
    },

    #[error("command {command}: flag '{name}' must be a bool defaulting to false")]
    FlagNotBool {
        command: &'static str,
        name: &'static str,
    },

    #[error("command {command}: default of '{name}' is not a {expected}")]
    DefaultTypeMismatch {
        command: &'static str,
        name: &'static str,
        expected: ValueType,
    },
}

/// Result type for argument coercion.
pub type ArgResult<T> = Result<T, ArgError>;
