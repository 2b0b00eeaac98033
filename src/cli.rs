//! CLI argument parsing for pdfedit.
//!
//! Argument structure only; semantic validation (path existence, suffix
//! checks, input counts) lives in [`crate::config`] so it can run as one
//! all-or-nothing pass before any file is touched.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Batch-edit PDF title metadata and concatenate PDF files.
///
/// In rename mode, each input's title metadata is rewritten to match its
/// filename. In merge mode, the inputs are concatenated in order into a
/// single output document.
#[derive(Parser, Debug)]
#[command(name = "pdfedit")]
#[command(version)]
#[command(about = "Batch-edit PDF title metadata and concatenate PDF files", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(group(ArgGroup::new("mode").required(true).args(["merge", "rename"])))]
pub struct Cli {
    /// Input PDF files, processed in order
    ///
    /// Values containing glob metacharacters are expanded, e.g.:
    ///   pdfedit --pdfs chapters/*.pdf --merge -o book.pdf
    #[arg(long = "pdfs", value_name = "FILE", num_args = 1.., required = true)]
    pub pdfs: Vec<String>,

    /// Concatenate the inputs into a single output document
    #[arg(long)]
    pub merge: bool,

    /// Rewrite each input's title metadata to match its filename
    #[arg(long)]
    pub rename: bool,

    /// Output path for the merged document (merge mode, must end in .pdf)
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Validate inputs and show what would be done without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show detailed information about each PDF
    #[arg(short, long)]
    pub verbose: bool,

    /// Keep processing remaining files when one fails (rename mode)
    #[arg(long)]
    pub continue_on_error: bool,
}
