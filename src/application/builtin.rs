//! The command table of the `spacy` executable

use crate::application::command::CommandSpec;
use crate::application::handlers;
use crate::application::registry::CommandRegistry;
use crate::domain::{ParamSpec, SpecError, Value, ValueType};

fn download() -> CommandSpec {
    CommandSpec::new(
        "download",
        "Download compatible model from default download path using pip. Model\n\
         can be shortcut, model name or, if --direct flag is set, full model name\n\
         with version.",
        handlers::download,
    )
    .param(ParamSpec::positional(
        "model",
        "model to download (shortcut or model name)",
    ))
    .param(ParamSpec::flag(
        "direct",
        Some("d"),
        "force direct download. Needs model name with version and won't perform \
         compatibility check",
    ))
}

fn link() -> CommandSpec {
    CommandSpec::new(
        "link",
        "Create a symlink for models within the spacy/data directory. Accepts\n\
         either the name of a pip package, or the local path to the model data\n\
         directory. Linking models allows loading them via spacy.load(link_name).",
        handlers::link,
    )
    .param(ParamSpec::positional(
        "origin",
        "package name or local path to model",
    ))
    .param(ParamSpec::positional(
        "link_name",
        "name of shortcut link to create",
    ))
    .param(ParamSpec::flag(
        "force",
        Some("f"),
        "force overwriting of existing link",
    ))
}

fn info() -> CommandSpec {
    CommandSpec::new(
        "info",
        "Print info about spaCy installation. If a model shortcut link is\n\
         specified as an argument, print model information. Flag --markdown\n\
         prints details in Markdown for easy copy-pasting to GitHub issues.",
        handlers::info,
    )
    .param(ParamSpec::positional("model", "optional: shortcut link of model").optional())
    .param(ParamSpec::flag(
        "markdown",
        Some("md"),
        "generate Markdown for GitHub issues",
    ))
}

fn package() -> CommandSpec {
    CommandSpec::new(
        "package",
        "Generate Python package for model data, including meta and required\n\
         installation files. A new directory will be created in the specified\n\
         output directory, and model data will be copied over.",
        handlers::package,
    )
    .param(ParamSpec::positional("input_dir", "directory with model data"))
    .param(ParamSpec::positional("output_dir", "output parent directory"))
    .param(ParamSpec::option(
        "meta",
        Some("m"),
        ValueType::String,
        "path to meta.json",
    ))
    .param(ParamSpec::flag(
        "force",
        Some("f"),
        "force overwriting of existing folder in output directory",
    ))
}

fn convert() -> CommandSpec {
    CommandSpec::new(
        "convert",
        "Convert files into JSON format for use with train command and other\n\
         experiment management functions.",
        handlers::convert,
    )
    .param(ParamSpec::positional("input_file", "input file"))
    .param(ParamSpec::positional(
        "output_dir",
        "output directory for converted file",
    ))
    .param(
        ParamSpec::option(
            "n_sents",
            Some("n"),
            ValueType::Float,
            "Number of sentences per doc",
        )
        .with_default(Value::Float(10.0)),
    )
    .param(ParamSpec::flag(
        "morphology",
        Some("m"),
        "Enable appending morphology to tags",
    ))
}

fn train() -> CommandSpec {
    CommandSpec::new(
        "train",
        "Train a model. Expects data in spaCy's JSON format.",
        handlers::train,
    )
    .param(ParamSpec::positional("lang", "model language"))
    .param(ParamSpec::positional(
        "output_dir",
        "output directory to store model in",
    ))
    .param(ParamSpec::positional(
        "train_data",
        "location of JSON-formatted training data",
    ))
    .param(
        ParamSpec::positional(
            "dev_data",
            "location of JSON-formatted development data (optional)",
        )
        .optional(),
    )
    .param(
        ParamSpec::option("n_iter", Some("n"), ValueType::Int, "number of iterations")
            .with_default(Value::Int(15)),
    )
    .param(
        ParamSpec::option("nsents", None, ValueType::Int, "number of sentences")
            .with_default(Value::Int(0)),
    )
    .param(ParamSpec::flag("use_gpu", Some("g"), "Use GPU"))
    .param(ParamSpec::flag("no_tagger", Some("T"), "Don't train tagger"))
    .param(ParamSpec::flag("no_parser", Some("P"), "Don't train parser"))
    .param(ParamSpec::flag("no_entities", Some("N"), "Don't train NER"))
}

/// Build the registry of all `spacy` subcommands.
///
/// # Errors
/// A [`SpecError`] if a declaration in the table is malformed.
pub fn builtin_registry() -> Result<CommandRegistry, SpecError> {
    let mut registry = CommandRegistry::new();
    for spec in [train(), convert(), download(), link(), info(), package()] {
        registry.register(spec)?;
    }
    Ok(registry)
}
