//! I/O boundary traits for testability
//!
//! These traits abstract process execution, allowing the collaborator bridge
//! to be tested with mock implementations.

use std::io;

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with inherited stdio and wait for it.
    ///
    /// Returns the exit code, or `None` if the process was terminated by a signal.
    fn run_inherited(&self, cmd: &str, args: &[&str]) -> io::Result<Option<i32>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real command runner using `std::process`.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run_inherited(&self, cmd: &str, args: &[&str]) -> io::Result<Option<i32>> {
        let status = std::process::Command::new(cmd).args(args).status()?;
        Ok(status.code())
    }
}
