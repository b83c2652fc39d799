//! Error types for the fallible parts of the crate.
//!
//! Only the archive scanner can fail: the markdown renderer and the text
//! checks degrade to best-effort output instead of returning errors.

use std::io;

/// Errors raised while opening or walking an archive's entry catalog.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The bytes are not a readable ZIP archive (truncated, corrupt, or a
    /// different format altogether).
    #[error("unreadable archive: {0}")]
    Unreadable(#[from] zip::result::ZipError),

    /// Underlying reader failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
