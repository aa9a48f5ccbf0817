//! Infrastructure layer: process execution and the collaborator bridge
//!
//! This layer implements the I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod python;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use python::PythonCollaborators;
