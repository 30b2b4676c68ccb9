//! Output formatting module

pub mod json;
pub mod styles;

use anyhow::{Context, Result};
use console::Term;
use owo_colors::OwoColorize as _;
use std::ffi::OsStr;
use std::fmt::Display;
use std::io::{ErrorKind, Write};
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors =
            !no_color && is_tty && !no_color_env(std::env::var_os("NO_COLOR").as_deref());

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠` to stderr. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            eprintln!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }
}

/// Whether a `NO_COLOR` value asks for plain output: set and non-empty.
#[must_use]
pub fn no_color_env(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Writes each item on its own line to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written. A closed pipe is not an error.
pub fn print_lines<I>(lines: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    write_lines(&mut std::io::stdout().lock(), lines)
}

/// Writes each item on its own line to `out`, then flushes.
///
/// Stops quietly when the reader has gone away (`BrokenPipe`), so
/// `hostkeys extract | head -1` exits cleanly.
///
/// # Errors
///
/// Returns an error for any write failure other than a broken pipe.
pub fn write_lines<W, I>(out: &mut W, lines: I) -> Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    let written = lines
        .into_iter()
        .try_for_each(|line| writeln!(out, "{line}"))
        .and_then(|()| out.flush());
    match written {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other.context("cannot write to stdout"),
    }
}
