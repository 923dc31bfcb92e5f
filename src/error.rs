use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("I/O error while {context} '{}': {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to copy '{}' to '{}': {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("transcript '{}' is not valid UTF-8: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
    #[error("refusing to copy '{}' onto itself", .path.display())]
    SameFile { path: PathBuf },
    #[error("failed to enumerate transcript directory '{}': {source}", .path.display())]
    Enumerate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create output directory '{}': {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CorpusError {
    pub(crate) fn io(context: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn copy(from: &Path, to: &Path, source: std::io::Error) -> Self {
        Self::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        }
    }

    pub(crate) fn encoding(path: &Path, source: FromUtf8Error) -> Self {
        Self::Encoding {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn same_file(path: &Path) -> Self {
        Self::SameFile {
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn enumerate(path: &Path, source: std::io::Error) -> Self {
        Self::Enumerate {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn create_output(path: &Path, source: std::io::Error) -> Self {
        Self::CreateOutput {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for errors that abort the whole run rather than a single pair.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Enumerate { .. } | Self::CreateOutput { .. })
    }
}
