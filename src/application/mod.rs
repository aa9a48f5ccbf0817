//! Application layer: command registry, dispatch and handlers
//!
//! This layer orchestrates the domain logic and reaches the outside world only
//! through the [`Collaborators`] trait.

pub mod builtin;
pub mod collaborators;
pub mod command;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod registry;

pub use builtin::builtin_registry;
pub use collaborators::{
    CollaboratorResult, Collaborators, ConvertRequest, DownloadRequest, InfoRequest,
    LinkRequest, PackageRequest, TrainRequest,
};
pub use command::{CommandSpec, Handler};
pub use dispatcher::{Dispatcher, Outcome};
pub use error::{ApplicationError, ApplicationResult, BoxError};
pub use registry::CommandRegistry;
