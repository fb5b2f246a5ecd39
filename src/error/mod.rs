//! Error types for output managers.
//!
//! Every failure is surfaced to the immediate caller; nothing in this crate
//! retries or recovers on its own.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while resolving or opening generator outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A required input was empty or malformed. Raised before any I/O.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        argument: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// The namespace directory could not be created.
    #[error("unable to create directory: {}", path.display())]
    DirectoryCreationFailed {
        /// Directory whose creation was attempted
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The artifact file could not be opened for writing.
    #[error("unable to open output file: {}", path.display())]
    FileOpenFailed {
        /// File whose opening was attempted
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Buffered content could not be flushed when an output was finished.
    #[error("unable to write output: {target}")]
    WriteFailed {
        /// Identifier of the output (file path or in-memory key)
        target: String,
        #[source]
        source: io::Error,
    },

    /// An output configuration document could not be parsed.
    #[error("invalid output configuration: {0}")]
    Config(String),
}

impl OutputError {
    pub(crate) fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    pub(crate) fn directory_creation(path: &Path, source: io::Error) -> Self {
        Self::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn file_open(path: &Path, source: io::Error) -> Self {
        Self::FileOpenFailed {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The filesystem path this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::DirectoryCreationFailed { path, .. } | Self::FileOpenFailed { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }

    /// Check whether the error was raised before touching the filesystem.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
