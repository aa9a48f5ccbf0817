//! CLI layer: process arguments, command execution and error reporting

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::Invocation;
pub use commands::{execute_command, report_error, run, write_error};
pub use error::{CliError, CliResult};
