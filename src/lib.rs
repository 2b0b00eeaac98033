//! pdfedit - batch PDF title renaming and concatenation.
//!
//! Two operations, selected by a mutually exclusive mode flag:
//!
//! - `--rename` rewrites each input's title metadata to match its filename
//!   (minus the `.pdf` suffix), replacing each file in place atomically.
//! - `--merge` concatenates the inputs, in order, into a single output
//!   document.
//!
//! All argument validation happens before any file is touched; the two
//! operations share no state and run strictly sequentially.

pub mod cli;
pub mod config;
mod error;
pub use error::*;
pub mod io;
pub mod merge;
pub mod metadata;
pub mod output;
pub mod rename;

use std::path::Path;

use crate::cli::Cli;
use crate::config::{Config, Mode};
use crate::metadata::InfoMap;
use crate::output::OutputFormatter;

/// Run the operation described by the parsed CLI arguments.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::try_from(cli)?;
    let formatter = OutputFormatter::new(config.quiet, config.verbose);

    match &config.mode {
        Mode::Rename => run_rename(&config, &formatter),
        Mode::Merge { output } => run_merge(&config, output, &formatter),
    }
}

fn run_rename(config: &Config, formatter: &OutputFormatter) -> Result<()> {
    if config.dry_run {
        formatter.info(&format!(
            "Dry run: would rename {} file(s)",
            config.inputs.len()
        ));
        for (idx, path) in config.inputs.iter().enumerate() {
            let doc = io::load_pdf(path)?;
            let current = InfoMap::from_document(&doc).title().unwrap_or_default();
            formatter.progress(
                idx + 1,
                config.inputs.len(),
                &format!(
                    "{}: \"{}\" -> \"{}\"",
                    path.display(),
                    current,
                    rename::title_for_path(path)
                ),
            );
        }
        return Ok(());
    }

    let renamed = rename::rename_files(&config.inputs, config.continue_on_error, formatter)?;
    formatter.success(&format!("Renamed {renamed} file(s)"));
    Ok(())
}

fn run_merge(config: &Config, output: &Path, formatter: &OutputFormatter) -> Result<()> {
    if config.dry_run {
        formatter.info(&format!(
            "Dry run: would merge {} file(s)",
            config.inputs.len()
        ));
        let mut total_pages = 0;
        for (idx, path) in config.inputs.iter().enumerate() {
            let doc = io::load_pdf(path)?;
            let pages = doc.get_pages().len();
            total_pages += pages;
            formatter.progress(
                idx + 1,
                config.inputs.len(),
                &format!("{} ({pages} page(s))", path.display()),
            );
        }
        formatter.info(&format!(
            "Would write {total_pages} page(s) to {}",
            output.display()
        ));
        return Ok(());
    }

    formatter.info(&format!("Merging {} PDF files...", config.inputs.len()));
    let stats = merge::merge_files(&config.inputs, output, formatter)?;

    if formatter.is_verbose() {
        formatter.detail("Input files", &stats.files_merged.to_string());
        formatter.detail("Total pages", &stats.total_pages.to_string());
    }
    formatter.success(&format!(
        "Created {} ({} pages from {} files)",
        output.display(),
        stats.total_pages,
        stats.files_merged
    ));
    Ok(())
}
