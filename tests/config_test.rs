//! Integration tests for Settings loading from an explicit config file.
//!
//! Note: These tests only write temp files; a global config or SPACY_*
//! variables present on the host would still apply underneath.

use std::fs;

use tempfile::TempDir;

use spacy_cli::application::ApplicationError;
use spacy_cli::config::{Settings, DEFAULT_MODULE};

#[test]
fn given_config_file_with_python_when_load_then_overrides_default() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("spacy.toml");
    fs::write(&path, "python = \"/opt/nlp/bin/python\"\n").unwrap();

    // Act
    let settings = Settings::load_from(Some(&path)).expect("load settings");

    // Assert
    if std::env::var("SPACY_PYTHON").is_err() {
        assert_eq!(settings.python, "/opt/nlp/bin/python");
    }
    if std::env::var("SPACY_MODULE").is_err() {
        assert_eq!(settings.module, DEFAULT_MODULE);
    }
}

#[test]
fn given_config_file_with_home_relative_python_when_load_then_tilde_expanded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("spacy.toml");
    fs::write(&path, "python = \"~/venv/bin/python\"\n").unwrap();

    let settings = Settings::load_from(Some(&path)).expect("load settings");

    if std::env::var("SPACY_PYTHON").is_err() {
        assert!(!settings.python.starts_with('~'), "got {}", settings.python);
        assert!(settings.python.ends_with("/venv/bin/python"));
    }
}

#[test]
fn given_malformed_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("spacy.toml");
    fs::write(&path, "python = [unclosed").unwrap();

    let err = Settings::load_from(Some(&path)).unwrap_err();

    match err {
        ApplicationError::Config { message } => assert!(message.starts_with("parse ")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Settings::load_from(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}
