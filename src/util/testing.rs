//! Test support: logging setup and recording doubles for the I/O seams

use std::env;
use std::io;
use std::sync::{Mutex, Once};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{
    CollaboratorResult, Collaborators, ConvertRequest, DownloadRequest, InfoRequest, LinkRequest,
    PackageRequest, TrainRequest,
};
use crate::infrastructure::traits::CommandRunner;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["config"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Download(DownloadRequest),
    Link(LinkRequest),
    Info(InfoRequest),
    Package(PackageRequest),
    Convert(ConvertRequest),
    Train(TrainRequest),
}

/// Collaborators that record every request and optionally fail.
#[derive(Debug, Default)]
pub struct RecordingCollaborators {
    calls: Mutex<Vec<Call>>,
    failure: Option<String>,
}

impl RecordingCollaborators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call records, then fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::default(),
            failure: Some(message.into()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: Call) -> CollaboratorResult {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match &self.failure {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

impl Collaborators for RecordingCollaborators {
    fn download(&self, request: &DownloadRequest) -> CollaboratorResult {
        self.record(Call::Download(request.clone()))
    }

    fn link(&self, request: &LinkRequest) -> CollaboratorResult {
        self.record(Call::Link(request.clone()))
    }

    fn info(&self, request: &InfoRequest) -> CollaboratorResult {
        self.record(Call::Info(request.clone()))
    }

    fn package(&self, request: &PackageRequest) -> CollaboratorResult {
        self.record(Call::Package(request.clone()))
    }

    fn convert(&self, request: &ConvertRequest) -> CollaboratorResult {
        self.record(Call::Convert(request.clone()))
    }

    fn train(&self, request: &TrainRequest) -> CollaboratorResult {
        self.record(Call::Train(request.clone()))
    }
}

/// What a [`RecordingRunner`] answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerResponse {
    Exit(i32),
    Signal,
    LaunchFails,
}

/// Command runner that records invocations instead of spawning processes.
#[derive(Debug)]
pub struct RecordingRunner {
    response: RunnerResponse,
    invocations: Mutex<Vec<(String, Vec<String>)>>,
}

impl RecordingRunner {
    pub fn new(response: RunnerResponse) -> Self {
        Self {
            response,
            invocations: Mutex::default(),
        }
    }

    pub fn invocations(&self) -> Vec<(String, Vec<String>)> {
        self.invocations
            .lock()
            .map(|i| i.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for RecordingRunner {
    fn run_inherited(&self, cmd: &str, args: &[&str]) -> io::Result<Option<i32>> {
        if let Ok(mut invocations) = self.invocations.lock() {
            invocations.push((cmd.to_string(), args.iter().map(|a| a.to_string()).collect()));
        }
        match self.response {
            RunnerResponse::Exit(code) => Ok(Some(code)),
            RunnerResponse::Signal => Ok(None),
            RunnerResponse::LaunchFails => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{cmd}: not found"),
            )),
        }
    }
}
