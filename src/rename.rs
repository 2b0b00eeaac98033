//! Batch title-rename operation.
//!
//! Rewrites each input's `Title` metadata to its filename with the trailing
//! `.pdf` stripped. The updated document is written to a temporary sibling
//! file which then replaces the original, so the original is never left in
//! a partially written state.

use std::path::{Path, PathBuf};

use crate::error::{PdfEditError, Result};
use crate::io::{load_pdf, write_atomic};
use crate::metadata::InfoMap;
use crate::output::OutputFormatter;

/// Title derived from `path`: the filename with one trailing `.pdf` removed.
///
/// Only the final suffix is stripped, so `report.final.pdf` becomes
/// `report.final` and `doc.pdf.pdf` becomes `doc.pdf`.
pub fn title_for_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.strip_suffix(".pdf") {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// Rewrite one file's title metadata to match its filename.
///
/// The Info dictionary is rebuilt from its string-valued entries only;
/// non-string metadata values do not survive the rewrite.
pub fn rename_file(path: &Path) -> Result<()> {
    let mut doc = load_pdf(path)?;

    let mut info = InfoMap::from_document(&doc);
    info.set(b"Title", &title_for_path(path));
    info.apply(&mut doc);

    write_atomic(&mut doc, path)
}

/// Rename a batch of files sequentially.
///
/// Aborts on the first failure unless `continue_on_error` is set, in which
/// case failed files are reported as warnings and skipped. Returns the
/// number of files renamed; with `continue_on_error`, a batch where every
/// file failed is an error.
pub fn rename_files(
    paths: &[PathBuf],
    continue_on_error: bool,
    formatter: &OutputFormatter,
) -> Result<usize> {
    let mut renamed = 0;

    for (idx, path) in paths.iter().enumerate() {
        formatter.progress(idx + 1, paths.len(), &format!("Renaming: {}", path.display()));

        match rename_file(path) {
            Ok(()) => renamed += 1,
            Err(err) if continue_on_error && err.is_recoverable() => {
                formatter.warning(&format!("Skipping {}: {err}", path.display()));
            }
            Err(err) => return Err(err),
        }
    }

    if renamed == 0 {
        return Err(PdfEditError::NoFilesRenamed);
    }

    Ok(renamed)
}
