//! PDF concatenation.
//!
//! The first input is loaded as the base document; each subsequent input
//! has its objects renumbered past the accumulated `max_id`, copied across,
//! and its page references appended to the base page tree. The base
//! document's Info dictionary survives, so the output carries the first
//! input's metadata.

use lopdf::{Document, Object, ObjectId};
use std::path::{Path, PathBuf};

use crate::error::{PdfEditError, Result};
use crate::io::{load_pdf, write_atomic};
use crate::output::OutputFormatter;

/// Statistics about a completed merge.
#[derive(Debug, Clone)]
pub struct MergeStats {
    /// Number of input files merged.
    pub files_merged: usize,
    /// Page count of the combined document.
    pub total_pages: usize,
}

/// Concatenate `paths` in order into a single in-memory document.
pub fn merge_documents(
    paths: &[PathBuf],
    formatter: &OutputFormatter,
) -> Result<(Document, MergeStats)> {
    let first = paths
        .first()
        .ok_or_else(|| PdfEditError::invalid_arguments("no input PDFs given"))?;

    formatter.progress(1, paths.len(), &format!("Appending: {}", first.display()));
    let mut merged = load_pdf(first)?;
    let mut max_id = merged.max_id;

    for (idx, path) in paths[1..].iter().enumerate() {
        formatter.progress(
            idx + 2,
            paths.len(),
            &format!("Appending: {}", path.display()),
        );

        let mut doc = load_pdf(path)?;

        // Shift object ids past the accumulated document to avoid collisions.
        doc.renumber_objects_with(max_id + 1);
        max_id = doc.max_id;

        let doc_pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
        merged.objects.extend(doc.objects);

        append_pages(&mut merged, &doc_pages)?;
    }

    merged.renumber_objects();
    merged.compress();

    let stats = MergeStats {
        files_merged: paths.len(),
        total_pages: merged.get_pages().len(),
    };

    Ok((merged, stats))
}

/// Merge `paths` and write the result to `output` atomically.
///
/// On any failure the operation aborts with nothing left at `output`.
pub fn merge_files(
    paths: &[PathBuf],
    output: &Path,
    formatter: &OutputFormatter,
) -> Result<MergeStats> {
    let (mut merged, stats) = merge_documents(paths, formatter)?;
    write_atomic(&mut merged, output)?;
    Ok(stats)
}

/// Append page references to the merged document's page tree.
fn append_pages(merged: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
    let catalog = merged
        .catalog_mut()
        .map_err(|e| PdfEditError::merge_failed(format!("failed to get catalog: {e}")))?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(|p| p.as_reference())
        .map_err(|e| PdfEditError::merge_failed(format!("failed to get pages reference: {e}")))?;

    let pages_dict = merged
        .get_object_mut(pages_id)
        .and_then(|obj| obj.as_dict_mut())
        .map_err(|e| PdfEditError::merge_failed(format!("failed to get pages object: {e}")))?;

    match pages_dict.get_mut(b"Kids") {
        Ok(Object::Array(kids)) => {
            for &page_id in page_ids {
                kids.push(Object::Reference(page_id));
            }
        }
        _ => return Err(PdfEditError::merge_failed("pages dictionary has no Kids array")),
    }

    let count = pages_dict
        .get(b"Count")
        .and_then(|c| c.as_i64())
        .unwrap_or(0);
    pages_dict.set("Count", Object::Integer(count + page_ids.len() as i64));

    Ok(())
}
