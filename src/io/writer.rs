//! Atomic PDF writes.
//!
//! All output goes through a temporary sibling file which is renamed over
//! the destination only once the write has fully succeeded. The
//! destination is never left half-written, and a pre-existing file at the
//! destination survives a failed write untouched.

use lopdf::Document;
use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PdfEditError, Result};

/// Temporary sibling path used for atomic writes: `<path>.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}

/// Write `doc` to `path` atomically.
pub fn write_atomic(doc: &mut Document, path: &Path) -> Result<()> {
    let tmp = temp_path(path);

    let result = write_to(doc, &tmp).and_then(|()| {
        std::fs::rename(&tmp, path).map_err(|source| PdfEditError::FailedToWrite {
            path: path.to_path_buf(),
            source,
        })
    });

    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }

    result
}

fn write_to(doc: &mut Document, path: &Path) -> Result<()> {
    let file =
        std::fs::File::create(path).map_err(|source| PdfEditError::FailedToCreateOutput {
            path: path.to_path_buf(),
            source,
        })?;

    let mut writer = BufWriter::new(file);
    doc.save_to(&mut writer)
        .map_err(|e| PdfEditError::FailedToWrite {
            path: path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;

    writer.flush().map_err(|source| PdfEditError::FailedToWrite {
        path: path.to_path_buf(),
        source,
    })
}
