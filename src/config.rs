//! Configuration module for pdfedit.
//!
//! Transforms CLI arguments into a validated, normalized configuration:
//! glob patterns are expanded, the operation mode is resolved, and every
//! argument invariant is checked here, before any file is touched. A
//! [`Config`] that exists has already passed validation in full.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{PdfEditError, Result};

/// The operation the tool was asked to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Rewrite each input's title metadata to match its filename.
    Rename,
    /// Concatenate the inputs into `output`.
    Merge { output: PathBuf },
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub inputs: Vec<PathBuf>,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub continue_on_error: bool,
}

impl TryFrom<&Cli> for Config {
    type Error = PdfEditError;

    fn try_from(cli: &Cli) -> Result<Self> {
        let mode = if cli.merge {
            let output = cli.out.clone().ok_or_else(|| {
                PdfEditError::invalid_arguments("merge mode requires an output path (-o/--out)")
            })?;
            Mode::Merge { output }
        } else {
            Mode::Rename
        };

        let config = Config {
            mode,
            inputs: expand_inputs(&cli.pdfs)?,
            dry_run: cli.dry_run,
            quiet: cli.quiet,
            verbose: cli.verbose,
            continue_on_error: cli.continue_on_error,
        };

        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Check every argument invariant.
    ///
    /// All-or-nothing: a violation anywhere in the input list fails the
    /// whole run before any PDF is opened.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(PdfEditError::invalid_arguments("no input PDFs given"));
        }

        if let Mode::Merge { output } = &self.mode {
            if !has_pdf_suffix(output) {
                return Err(PdfEditError::NotAPdfPath {
                    path: output.clone(),
                });
            }
            if self.inputs.len() < 2 {
                return Err(PdfEditError::invalid_arguments(
                    "merge requires at least two input PDFs",
                ));
            }
        }

        for path in &self.inputs {
            if !path.exists() {
                return Err(PdfEditError::FileNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(PdfEditError::NotAFile { path: path.clone() });
            }
            if !has_pdf_suffix(path) {
                return Err(PdfEditError::NotAPdfPath { path: path.clone() });
            }
        }

        Ok(())
    }
}

/// True when the path ends with a literal `.pdf` suffix.
pub(crate) fn has_pdf_suffix(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".pdf")
}

fn is_glob_pattern(value: &str) -> bool {
    value.contains(['*', '?', '['])
}

/// Expand `--pdfs` values into concrete paths.
///
/// Values with glob metacharacters are expanded via `glob`; a pattern that
/// matches nothing is an error. Literal paths pass through unchanged so a
/// missing file is later reported by its own name.
fn expand_inputs(values: &[String]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();

    for value in values {
        if !is_glob_pattern(value) {
            inputs.push(PathBuf::from(value));
            continue;
        }

        let entries = glob::glob(value).map_err(|source| PdfEditError::InvalidPattern {
            pattern: value.clone(),
            source,
        })?;

        let mut matched = false;
        for entry in entries {
            inputs.push(entry?);
            matched = true;
        }

        if !matched {
            return Err(PdfEditError::NoMatches {
                pattern: value.clone(),
            });
        }
    }

    Ok(inputs)
}
