use std::{io, path::PathBuf};

use lofty::error::LoftyError;

/// Every way a generation run can fail. None of these are recovered from.
#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    /// Template audio file is missing or is not a regular file.
    #[error("template audio file not found: {}", path.display())]
    MissingTemplate { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write tags to {}: {source}", path.display())]
    Tag {
        path: PathBuf,
        #[source]
        source: LoftyError,
    },

    /// The file was recognised but its format cannot carry an ID3v2 tag.
    #[error("{} is not a format that can hold ID3v2 tags", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("{}: expected {field} {expected:?}, found {found:?}", path.display())]
    VerifyMismatch {
        path: PathBuf,
        field: &'static str,
        expected: String,
        found: Option<String>,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| GenerateError::Io { path, source }
    }

    pub(crate) fn tag(path: impl Into<PathBuf>) -> impl FnOnce(LoftyError) -> Self {
        let path = path.into();
        move |source| GenerateError::Tag { path, source }
    }
}
