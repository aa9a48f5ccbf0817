//! Argument coercer: raw tokens to typed arguments
//!
//! Scans tokens left to right. Tokens naming a declared option or flag are
//! consumed as that parameter (options also consume the next token as their
//! value); everything else is collected as positional values and assigned to
//! the positional parameters in declaration order. Unassigned parameters fall
//! back to their defaults.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::domain::error::{ArgError, ArgResult};
use crate::domain::{ParamSpec, ParsedArguments, Role, Value};

/// Marks the end of option scanning; later tokens are positional.
pub const END_OF_OPTIONS: &str = "--";

/// Plain negative integers and decimals: `-5`, `-0.5`, `-.5`.
fn negative_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^-\d+$|^-\d*\.\d+$").expect("valid negative number pattern"))
}

/// Whether `token` is written like an option name rather than a value.
///
/// A lone `-` and negative numbers are values. Exponents and `inf`/`nan`
/// spellings are not numbers here.
pub fn looks_like_option(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && !negative_number().is_match(token)
}

/// Produce the typed argument bundle for `params` from `tokens`.
///
/// # Errors
/// - [`ArgError::UnrecognizedOption`] for an option-like token naming no parameter
/// - [`ArgError::MissingValue`] for an option with no following value token
/// - [`ArgError::Coercion`] for a value that does not parse as the declared type
/// - [`ArgError::UnexpectedArgument`] for surplus positional tokens
/// - [`ArgError::MissingArgument`] for a required positional with no token
pub fn coerce_arguments<S: AsRef<str>>(
    params: &[ParamSpec],
    tokens: &[S],
) -> ArgResult<ParsedArguments> {
    let mut named: HashMap<&'static str, Value> = HashMap::new();
    let mut positional_tokens: Vec<&str> = Vec::new();
    let mut options_done = false;

    let mut iter = tokens.iter().map(AsRef::as_ref);
    while let Some(token) = iter.next() {
        if options_done || !looks_like_option(token) {
            positional_tokens.push(token);
            continue;
        }
        if token == END_OF_OPTIONS {
            options_done = true;
            continue;
        }

        let (key, inline) = split_inline_value(token);
        let param = params
            .iter()
            .filter(|p| p.is_named())
            .find(|p| p.matches(key))
            .ok_or_else(|| ArgError::UnrecognizedOption {
                token: token.to_string(),
            })?;

        let value = match (param.role, inline) {
            (Role::Flag, None) => Value::Bool(true),
            (Role::Flag, Some(_)) => {
                return Err(ArgError::UnrecognizedOption {
                    token: token.to_string(),
                })
            }
            (_, Some(raw)) => param.coerce(raw)?,
            (_, None) => {
                let raw = iter.next().ok_or_else(|| ArgError::MissingValue {
                    name: param.name,
                    token: token.to_string(),
                })?;
                param.coerce(raw)?
            }
        };
        trace!(name = param.name, %value, "named argument");
        named.insert(param.name, value);
    }

    let mut positional_values = positional_tokens.into_iter();
    let mut parsed = ParsedArguments::new();
    for param in params {
        let value = match param.role {
            Role::Positional => match positional_values.next() {
                Some(raw) => Some(param.coerce(raw)?),
                None if param.required => {
                    return Err(ArgError::MissingArgument { name: param.name })
                }
                None => param.default.clone(),
            },
            Role::Option | Role::Flag => named
                .remove(param.name)
                .or_else(|| param.default.clone()),
        };
        parsed.insert(param.name, value);
    }

    if let Some(surplus) = positional_values.next() {
        return Err(ArgError::UnexpectedArgument {
            token: surplus.to_string(),
        });
    }
    Ok(parsed)
}

/// Split `--name=value` into its name and inline value.
fn split_inline_value(token: &str) -> (&str, Option<&str>) {
    if token.starts_with("--") {
        if let Some((key, value)) = token.split_once('=') {
            return (key, Some(value));
        }
    }
    (token, None)
}
