//! Error types for changepack-core

use std::path::PathBuf;

use crate::inputs::RootRole;
use crate::package::Prompt;

/// Result type for changepack-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end a changepack run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source and destination name the same location
    #[error("{message}")]
    InvalidConfiguration { message: String },

    /// A root path is not an existing directory
    #[error("The {role} folder does not exist or is not a directory: {path}")]
    MissingRoot { role: RootRole, path: PathBuf },

    /// No files anywhere under the source root
    #[error("No files found in the source folder.")]
    EmptySource { path: PathBuf },

    /// No files anywhere under the destination root
    #[error("No files found in the destination folder.")]
    EmptyDestination { path: PathBuf },

    /// The operator declined a prompt
    #[error("Cancelled: {prompt}")]
    UserCancelled { prompt: Prompt },

    /// A confirmation could not be obtained
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Filesystem error from changepack-fs
    #[error(transparent)]
    Fs(#[from] changepack_fs::Error),
}

/// Coarse classification of [`Error`], one per termination reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidConfiguration,
    EmptySource,
    EmptyDestination,
    Io,
    UserCancelled,
    Other,
}

impl ErrorKind {
    /// Process exit code for this kind. Success is `0`.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Other => 1,
            Self::InvalidConfiguration => 2,
            Self::EmptySource => 3,
            Self::EmptyDestination => 4,
            Self::Io => 5,
            Self::UserCancelled => 6,
        }
    }
}

impl Error {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfiguration { .. } | Self::MissingRoot { .. } => {
                ErrorKind::InvalidConfiguration
            }
            Self::EmptySource { .. } => ErrorKind::EmptySource,
            Self::EmptyDestination { .. } => ErrorKind::EmptyDestination,
            Self::UserCancelled { .. } => ErrorKind::UserCancelled,
            Self::Prompt { .. } => ErrorKind::Other,
            Self::Fs(inner) => match inner {
                changepack_fs::Error::ConfigParse { .. }
                | changepack_fs::Error::UnsupportedFormat { .. } => ErrorKind::Other,
                _ => ErrorKind::Io,
            },
        }
    }
}
