//! Tests for command selection, argument errors and handler invocation

use rstest::rstest;

use spacy_cli::application::{
    builtin_registry, ApplicationError, ConvertRequest, Dispatcher, DownloadRequest, InfoRequest,
    Outcome, PackageRequest, TrainRequest,
};
use spacy_cli::domain::ArgError;
use spacy_cli::util::testing::{self, Call, RecordingCollaborators};

const ALL_COMMANDS: [&str; 6] = ["convert", "download", "info", "link", "package", "train"];

fn dispatch(collaborators: &RecordingCollaborators, args: &[&str]) -> Result<Outcome, ApplicationError> {
    testing::init_test_setup();
    let registry = builtin_registry().unwrap();
    let dispatcher = Dispatcher::new(&registry, collaborators, "spacy");
    dispatcher.dispatch(args)
}

// ============================================================
// Command selection
// ============================================================

#[test]
fn given_no_arguments_when_dispatching_then_lists_commands_and_invokes_nothing() {
    let collaborators = RecordingCollaborators::new();

    let err = dispatch(&collaborators, &[]).unwrap_err();

    match &err {
        ApplicationError::NoCommand { available } => assert_eq!(available, &ALL_COMMANDS),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Available commands: convert, download, info, link, package, train"
    );
    assert!(collaborators.calls().is_empty());
}

#[rstest]
#[case("bogus")]
#[case("Download")]
#[case("")]
fn given_unknown_command_when_dispatching_then_reports_name_and_sorted_list(#[case] name: &str) {
    let collaborators = RecordingCollaborators::new();

    let err = dispatch(&collaborators, &[name, "foo"]).unwrap_err();

    match &err {
        ApplicationError::UnknownCommand { name: n, available } => {
            assert_eq!(n, name);
            assert_eq!(available, &ALL_COMMANDS);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        format!("Unknown command: {name}. Available: convert, download, info, link, package, train")
    );
    assert!(collaborators.calls().is_empty());
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn given_download_model_when_dispatching_then_download_invoked_without_direct() {
    let collaborators = RecordingCollaborators::new();

    let outcome = dispatch(&collaborators, &["download", "en_core_web_sm"]).unwrap();

    assert_eq!(outcome, Outcome::Completed { command: "download" });
    assert_eq!(
        collaborators.calls(),
        vec![Call::Download(DownloadRequest {
            model: "en_core_web_sm".into(),
            direct: false,
        })]
    );
}

#[test]
fn given_download_with_direct_flag_when_dispatching_then_direct_is_true() {
    let collaborators = RecordingCollaborators::new();

    dispatch(&collaborators, &["download", "en_core_web_sm-2.0.0", "-d"]).unwrap();

    assert_eq!(
        collaborators.calls(),
        vec![Call::Download(DownloadRequest {
            model: "en_core_web_sm-2.0.0".into(),
            direct: true,
        })]
    );
}

#[test]
fn given_convert_with_options_when_dispatching_then_typed_request_sent() {
    let collaborators = RecordingCollaborators::new();

    dispatch(&collaborators, &["convert", "data.conllu", "out/", "-n", "20", "-m"]).unwrap();

    assert_eq!(
        collaborators.calls(),
        vec![Call::Convert(ConvertRequest {
            input_file: "data.conllu".into(),
            output_dir: "out/".into(),
            n_sents: 20.0,
            morphology: true,
        })]
    );
}

#[test]
fn given_info_without_model_when_dispatching_then_model_is_absent() {
    let collaborators = RecordingCollaborators::new();

    dispatch(&collaborators, &["info", "--markdown"]).unwrap();

    assert_eq!(
        collaborators.calls(),
        vec![Call::Info(InfoRequest {
            model: None,
            markdown: true,
        })]
    );
}

#[rstest]
#[case::default(&[] as &[&str], None)]
#[case::zero(&["--nsents", "0"], None)]
#[case::limit(&["--nsents", "2000"], Some(2000))]
fn given_train_nsents_when_dispatching_then_zero_means_no_limit(
    #[case] extra: &[&str],
    #[case] expected: Option<i64>,
) {
    let collaborators = RecordingCollaborators::new();
    let mut args = vec!["train", "en", "model_out", "train.json", "dev.json"];
    args.extend_from_slice(extra);

    dispatch(&collaborators, &args).unwrap();

    assert_eq!(
        collaborators.calls(),
        vec![Call::Train(TrainRequest {
            lang: "en".into(),
            output_dir: "model_out".into(),
            train_data: "train.json".into(),
            dev_data: Some("dev.json".into()),
            n_iter: 15,
            nsents: expected,
            use_gpu: false,
            no_tagger: false,
            no_parser: false,
            no_entities: false,
        })]
    );
}

// ============================================================
// Failures
// ============================================================

#[test]
fn given_bad_arguments_when_dispatching_then_error_carries_prog_and_usage() {
    let collaborators = RecordingCollaborators::new();

    let err = dispatch(&collaborators, &["link", "origin_only"]).unwrap_err();

    match &err {
        ApplicationError::InvalidArguments { prog, usage, source } => {
            assert_eq!(prog, "spacy link");
            assert_eq!(usage, "usage: spacy link [-h] [-f] origin link_name");
            assert_eq!(source, &ArgError::MissingArgument { name: "link_name" });
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "spacy link: error: the following arguments are required: link_name"
    );
    assert!(collaborators.calls().is_empty());
}

#[test]
fn given_failing_collaborator_when_dispatching_then_error_passed_through_verbatim() {
    let collaborators = RecordingCollaborators::failing("Can't locate model data");

    let err = dispatch(&collaborators, &["link", "en_core_web_sm", "en"]).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Collaborator {
            operation: "link",
            ..
        }
    ));
    assert_eq!(err.to_string(), "link failed: Can't locate model data");
    assert_eq!(collaborators.calls().len(), 1);
}

// ============================================================
// Help
// ============================================================

#[test]
fn given_help_flag_when_dispatching_then_help_returned_and_nothing_invoked() {
    let collaborators = RecordingCollaborators::new();

    let outcome = dispatch(&collaborators, &["package", "--help"]).unwrap();

    match outcome {
        Outcome::Help { command, text } => {
            assert_eq!(command, "package");
            assert!(text.starts_with(
                "usage: spacy package [-h] [-m META] [-f] input_dir output_dir"
            ));
            assert!(text.contains("path to meta.json"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(collaborators.calls().is_empty());
}

#[test]
fn given_help_after_terminator_when_dispatching_then_treated_as_positional() {
    let collaborators = RecordingCollaborators::new();

    dispatch(&collaborators, &["download", "--", "-h"]).unwrap();

    assert_eq!(
        collaborators.calls(),
        vec![Call::Download(DownloadRequest {
            model: "-h".into(),
            direct: false,
        })]
    );
}

#[test]
fn given_help_token_as_option_value_when_dispatching_then_taken_as_value() {
    let collaborators = RecordingCollaborators::new();

    let outcome = dispatch(&collaborators, &["package", "in", "out", "--meta", "-h"]).unwrap();

    assert_eq!(outcome, Outcome::Completed { command: "package" });
    assert_eq!(
        collaborators.calls(),
        vec![Call::Package(PackageRequest {
            input_dir: "in".into(),
            output_dir: "out".into(),
            meta: Some("-h".into()),
            force: false,
        })]
    );
}
