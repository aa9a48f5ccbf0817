//! Command execution at the process boundary

use std::io::{self, Write};

use tracing::debug;

use crate::application::{builtin_registry, ApplicationError, CommandRegistry, Dispatcher, Outcome};
use crate::cli::args::Invocation;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

/// Load settings, build the registry and dispatch `invocation`.
pub fn run(invocation: &Invocation) -> CliResult<()> {
    let container = ServiceContainer::new(Settings::load()?);
    debug!(settings = ?container.settings, "settings loaded");
    let registry = builtin_registry().map_err(ApplicationError::from)?;
    execute_command(&registry, &container, invocation)
}

/// Dispatch one invocation against `registry`.
pub fn execute_command(
    registry: &CommandRegistry,
    container: &ServiceContainer,
    invocation: &Invocation,
) -> CliResult<()> {
    let dispatcher = Dispatcher::new(
        registry,
        container.collaborators.as_ref(),
        invocation.program.as_str(),
    );
    match dispatcher.dispatch(invocation.args.as_slice())? {
        Outcome::Help { text, .. } => output::info(text.trim_end()),
        Outcome::Completed { command } => debug!(command, "completed"),
    }
    Ok(())
}

/// Print `err` the way its kind is conventionally shown.
pub fn report_error(err: &CliError) {
    let _ = write_error(err, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Write `err` to `out` or `err_out` depending on its kind.
///
/// The command list goes to `out`. Argument errors write the usage line and
/// then the error; everything else is a single prefixed error line.
pub fn write_error(err: &CliError, out: &mut impl Write, err_out: &mut impl Write) -> io::Result<()> {
    let CliError::Application(app) = err;
    match app {
        ApplicationError::NoCommand { .. } => output::line(out, err),
        ApplicationError::InvalidArguments { usage, .. } => {
            output::line(err_out, &output::usage_line(usage))?;
            output::line(err_out, err)
        }
        _ => output::line(err_out, &output::error_line(err)),
    }
}
