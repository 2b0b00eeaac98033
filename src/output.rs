//! Console reporting with quiet and verbose modes.
//!
//! Informational output goes to stdout and is suppressed by `--quiet`;
//! warnings and errors always go to stderr.

use std::io::{self, IsTerminal};

/// Output formatter with configurable verbosity.
pub struct OutputFormatter {
    quiet: bool,
    verbose: bool,
    colored: bool,
}

impl OutputFormatter {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: io::stdout().is_terminal() && std::env::var("TERM").is_ok(),
        }
    }

    /// Formatter that only emits warnings and errors.
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    /// Print an informational message. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Print a success message. Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.paint("\x1b[32m", "✓ ", message));
        }
    }

    /// Print a warning to stderr. Always shown.
    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.paint("\x1b[33m", "⚠ ", message));
    }

    /// Print an error to stderr. Always shown.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.paint("\x1b[31m", "✗ ", message));
    }

    /// Print a labeled detail line. Only shown in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            println!("  {label}: {value}");
        }
    }

    /// Print a `[current/total]` progress line. Suppressed in quiet mode.
    pub fn progress(&self, current: usize, total: usize, message: &str) {
        if !self.quiet {
            println!("  [{current}/{total}] {message}");
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn paint(&self, color: &str, prefix: &str, message: &str) -> String {
        if self.colored {
            format!("{color}{prefix}{message}\x1b[0m")
        } else {
            format!("{prefix}{message}")
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}
