//! Collaborators hosted by a Python interpreter
//!
//! Each call runs `<python> -c <BOOTSTRAP> <module> <function> <json>`. The
//! JSON array holds the request's fields in declaration order and is splatted
//! into a positional call of `<module>.<function>`.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value as Json;
use tracing::debug;

use crate::application::{
    CollaboratorResult, Collaborators, ConvertRequest, DownloadRequest, InfoRequest, LinkRequest,
    PackageRequest, TrainRequest,
};
use crate::config::Settings;
use crate::infrastructure::traits::CommandRunner;
use crate::infrastructure::{InfraError, InfraResult};

/// Python snippet that imports the module and calls the function.
pub const BOOTSTRAP: &str = "import importlib, json, sys; \
getattr(importlib.import_module(sys.argv[1]), sys.argv[2])(*json.loads(sys.argv[3]))";

pub struct PythonCollaborators {
    runner: Arc<dyn CommandRunner>,
    python: String,
    module: String,
}

impl PythonCollaborators {
    pub fn new(runner: Arc<dyn CommandRunner>, settings: &Settings) -> Self {
        Self {
            runner,
            python: settings.python.clone(),
            module: settings.module.clone(),
        }
    }

    /// Encode a request as the positional argument list of the call.
    pub fn encode_arguments<T: Serialize>(request: &T) -> InfraResult<String> {
        let arguments: Vec<Json> = match serde_json::to_value(request)? {
            Json::Object(fields) => fields.into_iter().map(|(_, v)| v).collect(),
            Json::Array(items) => items,
            other => vec![other],
        };
        Ok(Json::Array(arguments).to_string())
    }

    fn call<T: Serialize>(&self, function: &'static str, request: &T) -> InfraResult<()> {
        let arguments = Self::encode_arguments(request)?;
        debug!(
            python = %self.python,
            module = %self.module,
            function,
            %arguments,
            "calling collaborator"
        );

        let args = ["-c", BOOTSTRAP, self.module.as_str(), function, arguments.as_str()];
        let code = self
            .runner
            .run_inherited(&self.python, &args)
            .map_err(|e| InfraError::io(format!("launch {}", self.python), e))?;

        match code {
            Some(0) => Ok(()),
            Some(code) => Err(InfraError::Interpreter {
                operation: function,
                message: format!("{} exited with status {}", self.python, code),
                exit_code: Some(code),
            }),
            None => Err(InfraError::Interpreter {
                operation: function,
                message: format!("{} was terminated by a signal", self.python),
                exit_code: None,
            }),
        }
    }
}

impl Collaborators for PythonCollaborators {
    fn download(&self, request: &DownloadRequest) -> CollaboratorResult {
        Ok(self.call("download", request)?)
    }

    fn link(&self, request: &LinkRequest) -> CollaboratorResult {
        Ok(self.call("link", request)?)
    }

    fn info(&self, request: &InfoRequest) -> CollaboratorResult {
        Ok(self.call("info", request)?)
    }

    fn package(&self, request: &PackageRequest) -> CollaboratorResult {
        Ok(self.call("package", request)?)
    }

    fn convert(&self, request: &ConvertRequest) -> CollaboratorResult {
        Ok(self.call("convert", request)?)
    }

    fn train(&self, request: &TrainRequest) -> CollaboratorResult {
        Ok(self.call("train", request)?)
    }
}
