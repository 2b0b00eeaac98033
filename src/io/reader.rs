//! PDF loading.

use lopdf::Document;
use std::path::Path;

use crate::error::{PdfEditError, Result};

/// Load a PDF document from disk.
///
/// Encrypted documents are reported as [`PdfEditError::Encrypted`], any
/// other load failure as [`PdfEditError::FailedToLoad`]. A document whose
/// page tree is empty is rejected as corrupted.
pub fn load_pdf(path: &Path) -> Result<Document> {
    let doc = Document::load(path).map_err(|e| {
        let reason = e.to_string();
        if reason.contains("encrypt") || reason.contains("password") {
            PdfEditError::encrypted(path.to_path_buf())
        } else {
            PdfEditError::failed_to_load(path.to_path_buf(), reason)
        }
    })?;

    if doc.get_pages().is_empty() {
        return Err(PdfEditError::corrupted(
            path.to_path_buf(),
            "PDF has no pages",
        ));
    }

    Ok(doc)
}
