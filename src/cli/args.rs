//! Process arguments: program identity and the tokens after it

use std::ffi::OsString;
use std::path::Path;

/// Program name used when argv[0] is missing or unusable.
pub const DEFAULT_PROGRAM: &str = "spacy";

/// The process arguments split into program name and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Split argv; non-UTF-8 arguments are converted lossily.
    pub fn from_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut iter = argv
            .into_iter()
            .map(|a| a.into().to_string_lossy().into_owned());
        let program = program_name(iter.next().as_deref());
        Self {
            program,
            args: iter.collect(),
        }
    }
}

/// File stem of argv[0], e.g. `/usr/bin/spacy` → `spacy`.
pub fn program_name(argv0: Option<&str>) -> String {
    argv0
        .and_then(|a| Path::new(a).file_stem())
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_PROGRAM)
        .to_string()
}
