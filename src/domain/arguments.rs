//! Resolved arguments of one invocation

use std::collections::BTreeMap;

use crate::domain::error::{ArgError, ArgResult};
use crate::domain::{Value, ValueType};

/// Typed values keyed by parameter name.
///
/// Holds exactly one entry per declared parameter. An entry of `None` is a
/// parameter that was neither given nor defaulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArguments {
    values: BTreeMap<&'static str, Option<Value>>,
}

impl ParsedArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: &'static str, value: Option<Value>) {
        self.values.insert(name, value);
    }

    /// Value of `name`, or `None` when absent or not declared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).and_then(Option::as_ref)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn slot(&self, name: &str) -> ArgResult<Option<&Value>> {
        self.values
            .get(name)
            .map(Option::as_ref)
            .ok_or_else(|| ArgError::UndeclaredParameter {
                name: name.to_string(),
            })
    }

    fn mismatch(name: &str, expected: ValueType) -> ArgError {
        ArgError::TypeMismatch {
            name: name.to_string(),
            expected,
        }
    }

    /// String value that may be absent.
    pub fn opt_string(&self, name: &str) -> ArgResult<Option<&str>> {
        match self.slot(name)? {
            None => Ok(None),
            Some(Value::Str(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(Self::mismatch(name, ValueType::String)),
        }
    }

    /// String value that must be present.
    pub fn string(&self, name: &str) -> ArgResult<&str> {
        self.opt_string(name)?
            .ok_or_else(|| Self::mismatch(name, ValueType::String))
    }

    pub fn opt_int(&self, name: &str) -> ArgResult<Option<i64>> {
        match self.slot(name)? {
            None => Ok(None),
            Some(Value::Int(i)) => Ok(Some(*i)),
            Some(_) => Err(Self::mismatch(name, ValueType::Int)),
        }
    }

    pub fn int(&self, name: &str) -> ArgResult<i64> {
        self.opt_int(name)?
            .ok_or_else(|| Self::mismatch(name, ValueType::Int))
    }

    pub fn float(&self, name: &str) -> ArgResult<f64> {
        match self.slot(name)? {
            Some(Value::Float(x)) => Ok(*x),
            _ => Err(Self::mismatch(name, ValueType::Float)),
        }
    }

    /// Flag state; an absent flag reads as `false`.
    pub fn flag(&self, name: &str) -> ArgResult<bool> {
        match self.slot(name)? {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(Self::mismatch(name, ValueType::Bool)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedArguments {
        let mut args = ParsedArguments::new();
        args.insert("model", Some(Value::Str("en".into())));
        args.insert("meta", None);
        args.insert("n_iter", Some(Value::Int(15)));
        args.insert("force", Some(Value::Bool(true)));
        args
    }

    #[test]
    fn test_typed_accessors() {
        let args = sample();
        assert_eq!(args.string("model").unwrap(), "en");
        assert_eq!(args.opt_string("meta").unwrap(), None);
        assert_eq!(args.int("n_iter").unwrap(), 15);
        assert!(args.flag("force").unwrap());
        assert_eq!(args.len(), 4);
    }

    #[test]
    fn test_undeclared_and_mismatch() {
        let args = sample();
        assert!(matches!(
            args.string("nope"),
            Err(ArgError::UndeclaredParameter { .. })
        ));
        assert!(matches!(
            args.float("n_iter"),
            Err(ArgError::TypeMismatch {
                expected: ValueType::Float,
                ..
            })
        ));
        assert!(args.string("meta").is_err());
    }
}
