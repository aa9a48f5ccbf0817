//! Usage and help text derived from parameter declarations

use std::fmt::Write as _;

use crate::domain::coercer::END_OF_OPTIONS;
use crate::domain::{ParamSpec, Role};

const HELP_COLUMN: usize = 24;

/// Option tokens that request help instead of running the command.
pub const HELP_TOKENS: [&str; 2] = ["-h", "--help"];

/// Whether help is requested before any `--` terminator.
///
/// The token after a value-bearing option is its value, never a help request.
pub fn wants_help<S: AsRef<str>>(params: &[ParamSpec], tokens: &[S]) -> bool {
    let mut iter = tokens.iter().map(AsRef::as_ref);
    while let Some(token) = iter.next() {
        if token == END_OF_OPTIONS {
            return false;
        }
        if HELP_TOKENS.contains(&token) {
            return true;
        }
        let takes_value = params
            .iter()
            .any(|p| p.role == Role::Option && p.matches(token));
        if takes_value {
            iter.next();
        }
    }
    false
}

fn metavar(param: &ParamSpec) -> String {
    param.name.to_uppercase()
}

/// One-line synopsis, e.g. `usage: spacy link [-h] [-f] origin link_name`.
pub fn usage_line(prog: &str, params: &[ParamSpec]) -> String {
    let mut line = format!("usage: {prog} [-h]");
    for param in params.iter().filter(|p| p.is_named()) {
        let name = param.short_flag().unwrap_or_else(|| param.long_flag());
        match param.role {
            Role::Option => {
                let _ = write!(line, " [{name} {}]", metavar(param));
            }
            _ => {
                let _ = write!(line, " [{name}]");
            }
        }
    }
    for param in params.iter().filter(|p| !p.is_named()) {
        if param.required {
            let _ = write!(line, " {}", param.name);
        } else {
            let _ = write!(line, " [{}]", param.name);
        }
    }
    line
}

fn push_entry(out: &mut String, label: &str, help: &str) {
    if label.len() + 2 >= HELP_COLUMN {
        let _ = writeln!(out, "  {label}");
        let _ = writeln!(out, "{:width$}{help}", "", width = HELP_COLUMN);
    } else {
        let _ = writeln!(out, "  {label:<width$}{help}", width = HELP_COLUMN - 2);
    }
}

fn described(param: &ParamSpec) -> String {
    match (&param.role, &param.default) {
        (Role::Flag, _) | (_, None) => param.help.to_string(),
        (_, Some(default)) => format!("{} [{}]", param.help, default),
    }
}

/// Full help: usage, description and one entry per parameter.
pub fn render_help(prog: &str, about: &str, params: &[ParamSpec]) -> String {
    let mut out = usage_line(prog, params);
    out.push_str("\n\n");
    if !about.is_empty() {
        out.push_str(about);
        out.push_str("\n\n");
    }

    let positionals: Vec<_> = params.iter().filter(|p| !p.is_named()).collect();
    if !positionals.is_empty() {
        out.push_str("positional arguments:\n");
        for param in positionals {
            push_entry(&mut out, param.name, &described(param));
        }
        out.push('\n');
    }

    out.push_str("optional arguments:\n");
    push_entry(&mut out, "-h, --help", "show this help message and exit");
    for param in params.iter().filter(|p| p.is_named()) {
        let value = match param.role {
            Role::Option => format!(" {}", metavar(param)),
            _ => String::new(),
        };
        let label = match param.short_flag() {
            Some(short) => format!("{short}{value}, {}{value}", param.long_flag()),
            None => format!("{}{value}", param.long_flag()),
        };
        push_entry(&mut out, &label, &described(param));
    }
    out
}
