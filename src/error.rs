//! Error types for folio operations.

use thiserror::Error;

/// Errors that can occur while assembling or writing a package.
///
/// Every variant aborts finalization; nothing is downgraded to a default.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown media type for file {path}")]
    UnknownMediaType { path: String },

    #[error("table of contents references missing file {path}")]
    UnresolvedTocPath { path: String },

    #[error("malformed input for {path}: {reason}")]
    MalformedInput { path: String, reason: String },

    #[error("file {path} already exists in the package")]
    DuplicatePath { path: String },

    #[error("an auto-generated navigation page was already requested")]
    DuplicateAutoNavigation,

    #[error("auto-generated navigation page \"{label}\" was never resolved")]
    UnresolvedAutoNavigation { label: String },

    #[error("export cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to move finished archive into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

impl Error {
    pub(crate) fn malformed(path: impl Into<String>, reason: impl ToString) -> Self {
        Error::MalformedInput {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
