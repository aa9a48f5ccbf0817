//! Command handlers: map coerced arguments onto collaborator requests

use tracing::info;

use crate::application::collaborators::{
    Collaborators, ConvertRequest, DownloadRequest, InfoRequest, LinkRequest, PackageRequest,
    TrainRequest,
};
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::ParsedArguments;

pub fn download(args: &ParsedArguments, collaborators: &dyn Collaborators) -> ApplicationResult<()> {
    let request = DownloadRequest {
        model: args.string("model")?.to_string(),
        direct: args.flag("direct")?,
    };
    info!(?request, "download");
    collaborators
        .download(&request)
        .map_err(|e| ApplicationError::collaborator("download", e))
}

pub fn link(args: &ParsedArguments, collaborators: &dyn Collaborators) -> ApplicationResult<()> {
    let request = LinkRequest {
        origin: args.string("origin")?.to_string(),
        link_name: args.string("link_name")?.to_string(),
        force: args.flag("force")?,
    };
    info!(?request, "link");
    collaborators
        .link(&request)
        .map_err(|e| ApplicationError::collaborator("link", e))
}

pub fn info(args: &ParsedArguments, collaborators: &dyn Collaborators) -> ApplicationResult<()> {
    let request = InfoRequest {
        model: args.opt_string("model")?.map(str::to_string),
        markdown: args.flag("markdown")?,
    };
    info!(?request, "info");
    collaborators
        .info(&request)
        .map_err(|e| ApplicationError::collaborator("info", e))
}

pub fn package(args: &ParsedArguments, collaborators: &dyn Collaborators) -> ApplicationResult<()> {
    let request = PackageRequest {
        input_dir: args.string("input_dir")?.to_string(),
        output_dir: args.string("output_dir")?.to_string(),
        meta: args.opt_string("meta")?.map(str::to_string),
        force: args.flag("force")?,
    };
    info!(?request, "package");
    collaborators
        .package(&request)
        .map_err(|e| ApplicationError::collaborator("package", e))
}

pub fn convert(args: &ParsedArguments, collaborators: &dyn Collaborators) -> ApplicationResult<()> {
    let request = ConvertRequest {
        input_file: args.string("input_file")?.to_string(),
        output_dir: args.string("output_dir")?.to_string(),
        n_sents: args.float("n_sents")?,
        morphology: args.flag("morphology")?,
    };
    info!(?request, "convert");
    collaborators
        .convert(&request)
        .map_err(|e| ApplicationError::collaborator("convert", e))
}

pub fn train(args: &ParsedArguments, collaborators: &dyn Collaborators) -> ApplicationResult<()> {
    // 0 means "no limit"
    let nsents = Some(args.int("nsents")?).filter(|n| *n != 0);
    let request = TrainRequest {
        lang: args.string("lang")?.to_string(),
        output_dir: args.string("output_dir")?.to_string(),
        train_data: args.string("train_data")?.to_string(),
        dev_data: args.opt_string("dev_data")?.map(str::to_string),
        n_iter: args.int("n_iter")?,
        nsents,
        use_gpu: args.flag("use_gpu")?,
        no_tagger: args.flag("no_tagger")?,
        no_parser: args.flag("no_parser")?,
        no_entities: args.flag("no_entities")?,
    };
    info!(?request, "train");
    collaborators
        .train(&request)
        .map_err(|e| ApplicationError::collaborator("train", e))
}
