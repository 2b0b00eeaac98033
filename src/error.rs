//! Error types for pdfedit.
//!
//! Three families of failure, mirroring the order in which the tool can hit
//! them: validation errors (bad arguments, raised before any file is
//! opened), parse errors (a PDF that cannot be loaded), and I/O errors
//! (output files that cannot be created or written).

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfedit operations.
pub type Result<T> = std::result::Result<T, PdfEditError>;

#[derive(Debug, thiserror::Error)]
pub enum PdfEditError {
    /// Argument combination rejected before any I/O.
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Input path does not reference an existing file.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input path exists but is not a regular file.
    #[error("not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    /// Path is missing the required `.pdf` suffix.
    #[error("not a PDF path (expected a '.pdf' suffix): {}", path.display())]
    NotAPdfPath { path: PathBuf },

    /// A `--pdfs` glob pattern failed to parse.
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// A `--pdfs` glob pattern matched no files.
    #[error("no files matched pattern: {pattern}")]
    NoMatches { pattern: String },

    /// Filesystem error while expanding a glob pattern.
    #[error("failed to read glob entry: {0}")]
    Glob(#[from] glob::GlobError),

    /// lopdf rejected the file.
    #[error("failed to load PDF {}: {}", path.display(), reason)]
    FailedToLoad { path: PathBuf, reason: String },

    /// The file parsed but its structure is unusable.
    #[error("corrupted or invalid PDF {}: {}", path.display(), details)]
    Corrupted { path: PathBuf, details: String },

    /// Encrypted documents are not processed.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        path.display()
    )]
    Encrypted { path: PathBuf },

    /// The merged page tree could not be assembled.
    #[error("merge failed: {reason}")]
    MergeFailed { reason: String },

    /// With --continue-on-error, every file in the batch failed.
    #[error("no files were renamed")]
    NoFilesRenamed,

    /// Output file could not be created.
    #[error("failed to create output file {}: {}", path.display(), source)]
    FailedToCreateOutput { path: PathBuf, source: io::Error },

    /// Output file could not be written or moved into place.
    #[error("failed to write {}: {}", path.display(), source)]
    FailedToWrite { path: PathBuf, source: io::Error },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PdfEditError {
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    pub fn failed_to_load(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoad {
            path,
            reason: reason.into(),
        }
    }

    pub fn corrupted(path: PathBuf, details: impl Into<String>) -> Self {
        Self::Corrupted {
            path,
            details: details.into(),
        }
    }

    pub fn encrypted(path: PathBuf) -> Self {
        Self::Encrypted { path }
    }

    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// True for per-file failures that --continue-on-error may skip.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FailedToLoad { .. }
                | Self::Corrupted { .. }
                | Self::Encrypted { .. }
                | Self::FailedToCreateOutput { .. }
                | Self::FailedToWrite { .. }
        )
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArguments { .. }
            | Self::FileNotFound { .. }
            | Self::NotAFile { .. }
            | Self::NotAPdfPath { .. }
            | Self::InvalidPattern { .. }
            | Self::NoMatches { .. }
            | Self::Glob(_) => 2,
            Self::FailedToLoad { .. }
            | Self::Corrupted { .. }
            | Self::Encrypted { .. }
            | Self::MergeFailed { .. } => 3,
            Self::FailedToCreateOutput { .. } | Self::FailedToWrite { .. } | Self::Io(_) => 5,
            Self::NoFilesRenamed => 1,
        }
    }
}
