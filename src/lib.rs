//! Command-line front end for spaCy.
//!
//! Subcommands are declared as parameter tables ([`domain::ParamSpec`]) bound
//! to handlers. The [`application::Dispatcher`] selects a command from the
//! process arguments, coerces the remaining tokens into typed values and hands
//! them to the [`application::Collaborators`] that do the actual work.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
