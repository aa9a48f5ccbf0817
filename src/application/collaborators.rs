//! Collaborator seam: the operations the commands delegate to
//!
//! Each request carries the collaborator's arguments in call order; field
//! names match the collaborator's parameter names.

use serde::Serialize;

use crate::application::error::BoxError;

/// Result of one collaborator call.
pub type CollaboratorResult = Result<(), BoxError>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadRequest {
    pub model: String,
    pub direct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRequest {
    pub origin: String,
    pub link_name: String,
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoRequest {
    pub model: Option<String>,
    pub markdown: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageRequest {
    pub input_dir: String,
    pub output_dir: String,
    pub meta: Option<String>,
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertRequest {
    pub input_file: String,
    pub output_dir: String,
    pub n_sents: f64,
    pub morphology: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainRequest {
    pub lang: String,
    pub output_dir: String,
    pub train_data: String,
    pub dev_data: Option<String>,
    pub n_iter: i64,
    /// `None` means no sentence limit.
    pub nsents: Option<i64>,
    pub use_gpu: bool,
    pub no_tagger: bool,
    pub no_parser: bool,
    pub no_entities: bool,
}

/// The external operations behind the commands.
///
/// Implementations may block for a long time and report failures as opaque
/// errors; the dispatcher only formats them.
pub trait Collaborators: Send + Sync {
    /// Download a compatible model package.
    fn download(&self, request: &DownloadRequest) -> CollaboratorResult;

    /// Create a shortcut link to a model.
    fn link(&self, request: &LinkRequest) -> CollaboratorResult;

    /// Print installation or model diagnostics.
    fn info(&self, request: &InfoRequest) -> CollaboratorResult;

    /// Build an installable package from a model directory.
    fn package(&self, request: &PackageRequest) -> CollaboratorResult;

    /// Convert a corpus into the training JSON format.
    fn convert(&self, request: &ConvertRequest) -> CollaboratorResult;

    /// Train a model.
    fn train(&self, request: &TrainRequest) -> CollaboratorResult;
}
