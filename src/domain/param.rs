//! Parameter descriptors: the declarative metadata of one command parameter

use std::collections::HashSet;
use std::fmt;

use crate::domain::error::{ArgError, ArgResult, SpecError};

/// How a parameter receives its value on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Identified by position among the non-option tokens.
    Positional,
    /// Named, followed by a value token (`--meta path`).
    Option,
    /// Named boolean, true when present (`--force`).
    Flag,
}

/// Primitive type a raw token is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Int,
    Float,
    Bool,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::String => "str",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// A typed argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Str(_) => ValueType::String,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Bool(_) => ValueType::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Declaration of one formal parameter of a command.
///
/// Built with the [`ParamSpec::positional`], [`ParamSpec::option`] and
/// [`ParamSpec::flag`] constructors, refined with `with_*` methods.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub role: Role,
    /// Alias used with a single dash. May be more than one character (`md`).
    pub short: Option<&'static str>,
    pub value_type: ValueType,
    pub help: &'static str,
    /// Value used when the parameter is not given. `None` with `required == false`
    /// means the parameter resolves to "absent".
    pub default: Option<Value>,
    pub required: bool,
}

impl ParamSpec {
    /// Required positional string parameter.
    pub fn positional(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            role: Role::Positional,
            short: None,
            value_type: ValueType::String,
            help,
            default: None,
            required: true,
        }
    }

    /// Value-bearing named parameter; absent unless a default is set.
    pub fn option(
        name: &'static str,
        short: Option<&'static str>,
        value_type: ValueType,
        help: &'static str,
    ) -> Self {
        Self {
            name,
            role: Role::Option,
            short,
            value_type,
            help,
            default: None,
            required: false,
        }
    }

    /// Boolean flag defaulting to `false`.
    pub fn flag(name: &'static str, short: Option<&'static str>, help: &'static str) -> Self {
        Self {
            name,
            role: Role::Flag,
            short,
            value_type: ValueType::Bool,
            help,
            default: Some(Value::Bool(false)),
            required: false,
        }
    }

    pub fn with_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self.required = false;
        self
    }

    /// Positional that may be omitted; resolves to absent.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn is_named(&self) -> bool {
        self.role != Role::Positional
    }

    /// Long form as typed on the command line.
    pub fn long_flag(&self) -> String {
        format!("--{}", self.name)
    }

    /// Short form as typed on the command line.
    pub fn short_flag(&self) -> Option<String> {
        self.short.map(|s| format!("-{s}"))
    }

    /// Whether `token` names this parameter in long or short form.
    pub fn matches(&self, token: &str) -> bool {
        if let Some(long) = token.strip_prefix("--") {
            return long == self.name;
        }
        match (token.strip_prefix('-'), self.short) {
            (Some(alias), Some(short)) => alias == short,
            _ => false,
        }
    }

    /// Convert a raw token into this parameter's declared type.
    pub fn coerce(&self, token: &str) -> ArgResult<Value> {
        let invalid = || ArgError::Coercion {
            name: self.name,
            expected: self.value_type,
            token: token.to_string(),
        };
        match self.value_type {
            ValueType::String => Ok(Value::Str(token.to_string())),
            ValueType::Int => token.parse().map(Value::Int).map_err(|_| invalid()),
            ValueType::Float => token.parse().map(Value::Float).map_err(|_| invalid()),
            ValueType::Bool => match token.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(Value::Bool(true)),
                "false" | "no" | "0" => Ok(Value::Bool(false)),
                _ => Err(invalid()),
            },
        }
    }
}

/// Check the declaration rules of a command's parameter list.
pub fn validate_params(command: &'static str, params: &[ParamSpec]) -> Result<(), SpecError> {
    let mut names = HashSet::new();
    let mut aliases = HashSet::new();
    let mut seen_named = false;
    let mut seen_optional = false;

    for param in params {
        if !names.insert(param.name) {
            return Err(SpecError::DuplicateParameter {
                command,
                name: param.name,
            });
        }

        match param.role {
            Role::Positional => {
                if seen_named {
                    return Err(SpecError::PositionalAfterNamed {
                        command,
                        name: param.name,
                    });
                }
                if param.required && seen_optional {
                    return Err(SpecError::RequiredAfterOptional {
                        command,
                        name: param.name,
                    });
                }
                seen_optional |= !param.required;
            }
            Role::Option | Role::Flag => {
                seen_named = true;
                for alias in std::iter::once(param.long_flag()).chain(param.short_flag()) {
                    if !aliases.insert(alias.clone()) {
                        return Err(SpecError::DuplicateAlias { command, alias });
                    }
                }
            }
        }

        if param.role == Role::Flag
            && (param.value_type != ValueType::Bool || param.default != Some(Value::Bool(false)))
        {
            return Err(SpecError::FlagNotBool {
                command,
                name: param.name,
            });
        }

        if let Some(default) = &param.default {
            if default.value_type() != param.value_type {
                return Err(SpecError::DefaultTypeMismatch {
                    command,
                    name: param.name,
                    expected: param.value_type,
                });
            }
        }
    }
    Ok(())
}
