//! Service container for dependency injection
//!
//! Wires the collaborators to their process runner and settings.

use std::sync::Arc;

use crate::application::Collaborators;
use crate::config::Settings;
use crate::infrastructure::python::PythonCollaborators;
use crate::infrastructure::traits::{CommandRunner, RealCommandRunner};

/// Container holding the settings and the collaborator implementation.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Operations behind the commands
    pub collaborators: Arc<dyn Collaborators>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealCommandRunner))
    }

    /// Create a service container with a custom command runner (for testing).
    pub fn with_deps(settings: Settings, cmd: Arc<dyn CommandRunner>) -> Self {
        let collaborators: Arc<dyn Collaborators> =
            Arc::new(PythonCollaborators::new(cmd, &settings));
        Self::with_collaborators(settings, collaborators)
    }

    /// Create a service container with custom collaborators (for testing).
    pub fn with_collaborators(settings: Settings, collaborators: Arc<dyn Collaborators>) -> Self {
        Self {
            settings: Arc::new(settings),
            collaborators,
        }
    }
}
