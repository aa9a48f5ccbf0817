use std::{env, process};

use spacy_cli::cli::{report_error, run, Invocation};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "SPACY_LOG";

fn main() {
    setup_logging();

    let invocation = Invocation::from_argv(env::args_os());
    if let Err(e) = run(&invocation) {
        report_error(&e);
        process::exit(e.exit_code());
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Create a noisy module filter
    let noisy_modules = ["config"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Diagnostics go to stderr; stdout belongs to the collaborators
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();
    tracing::debug!("logging initialised");
}
