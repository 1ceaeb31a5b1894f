//! Error types for changepack-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from changepack-core
    #[error(transparent)]
    Core(#[from] changepack_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> changepack_core::ErrorKind {
        match self {
            Self::Core(e) => e.kind(),
            Self::Io(_) => changepack_core::ErrorKind::Io,
            Self::Dialoguer(_) | Self::Json(_) | Self::User { .. } => {
                changepack_core::ErrorKind::Other
            }
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}
