//! Tests for the command registry and the built-in command table

use rstest::rstest;

use spacy_cli::application::{
    builtin_registry, ApplicationError, ApplicationResult, Collaborators, CommandRegistry,
    CommandSpec,
};
use spacy_cli::domain::{ParamSpec, ParsedArguments, Role, SpecError, Value, ValueType};

fn noop(_: &ParsedArguments, _: &dyn Collaborators) -> ApplicationResult<()> {
    Ok(())
}

#[rstest]
#[case("download", &["model", "direct"])]
#[case("link", &["origin", "link_name", "force"])]
#[case("info", &["model", "markdown"])]
#[case("package", &["input_dir", "output_dir", "meta", "force"])]
#[case("convert", &["input_file", "output_dir", "n_sents", "morphology"])]
#[case(
    "train",
    &["lang", "output_dir", "train_data", "dev_data", "n_iter", "nsents",
      "use_gpu", "no_tagger", "no_parser", "no_entities"]
)]
fn given_builtin_registry_when_resolving_then_returns_declared_command(
    #[case] name: &str,
    #[case] params: &[&str],
) {
    let registry = builtin_registry().unwrap();

    let spec = registry.resolve(name).unwrap();

    assert_eq!(spec.name, name);
    assert_eq!(spec.params.iter().map(|p| p.name).collect::<Vec<_>>(), params);
}

#[test]
fn given_builtin_registry_when_resolving_unknown_then_lists_sorted_names() {
    let registry = builtin_registry().unwrap();

    let err = registry.resolve("model").unwrap_err();

    match err {
        ApplicationError::UnknownCommand { name, available } => {
            assert_eq!(name, "model");
            assert_eq!(
                available,
                vec!["convert", "download", "info", "link", "package", "train"]
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn given_builtin_registry_then_flags_are_bool_and_default_false() {
    let registry = builtin_registry().unwrap();

    for spec in registry.iter() {
        for param in spec.params.iter().filter(|p| p.role == Role::Flag) {
            assert_eq!(param.value_type, ValueType::Bool, "{}.{}", spec.name, param.name);
            assert_eq!(param.default, Some(Value::Bool(false)));
        }
    }
}

#[test]
fn given_builtin_registry_then_option_defaults_match_declarations() {
    let registry = builtin_registry().unwrap();

    let convert = registry.get("convert").unwrap();
    assert_eq!(
        convert.param_named("n_sents").unwrap().default,
        Some(Value::Float(10.0))
    );
    let train = registry.get("train").unwrap();
    assert_eq!(train.param_named("n_iter").unwrap().default, Some(Value::Int(15)));
    assert_eq!(train.param_named("nsents").unwrap().default, Some(Value::Int(0)));
    let package = registry.get("package").unwrap();
    assert_eq!(package.param_named("meta").unwrap().default, None);
}

// ============================================================
// Declaration rules
// ============================================================

#[test]
fn given_required_after_optional_positional_when_registering_then_rejected() {
    let mut registry = CommandRegistry::new();
    let spec = CommandSpec::new("train", "", noop)
        .param(ParamSpec::positional("dev_data", "").optional())
        .param(ParamSpec::positional("lang", ""));

    assert_eq!(
        registry.register(spec),
        Err(SpecError::RequiredAfterOptional {
            command: "train",
            name: "lang"
        })
    );
}

#[test]
fn given_flag_with_non_bool_type_when_registering_then_rejected() {
    let mut registry = CommandRegistry::new();
    let spec = CommandSpec::new("info", "", noop)
        .param(ParamSpec::flag("markdown", Some("md"), "").with_type(ValueType::String));

    assert!(matches!(
        registry.register(spec),
        Err(SpecError::FlagNotBool { name: "markdown", .. })
    ));
}

#[test]
fn given_duplicate_parameter_when_registering_then_rejected() {
    let mut registry = CommandRegistry::new();
    let spec = CommandSpec::new("link", "", noop)
        .param(ParamSpec::positional("origin", ""))
        .param(ParamSpec::positional("origin", ""));

    assert!(matches!(
        registry.register(spec),
        Err(SpecError::DuplicateParameter { name: "origin", .. })
    ));
}
