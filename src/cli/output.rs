//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

/// Error line with a red bold "error:" prefix.
pub fn error_line(msg: &(impl Display + ?Sized)) -> String {
    format!("{}: {}", "error".red().bold(), msg)
}

/// Usage synopsis in bold.
pub fn usage_line(msg: &(impl Display + ?Sized)) -> String {
    msg.to_string().bold().to_string()
}

/// Write one line to `out`.
pub fn line(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg)
}

/// Print plain output (no color, for data and help text)
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}
