use std::io;

use thiserror::Error;

/// Library-wide error type for cask generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required environment variable is absent or empty.
    #[error("Missing required environment variable '{name}'")]
    MissingEnvVar { name: String },

    /// Cask variant identifier is invalid.
    #[error("Invalid cask variant '{0}': must be one of dual, single")]
    InvalidVariant(String),

    /// Template registration or rendering failed.
    #[error("Template error: {0}")]
    Template(String),

    /// The cask on disk differs from the freshly rendered one.
    #[error("Cask at {path} is out of date")]
    CaskOutOfDate { path: String },
}

impl AppError {
    pub fn missing_env<S: Into<String>>(name: S) -> Self {
        AppError::MissingEnvVar { name: name.into() }
    }

    /// Map the error onto an `io::ErrorKind`.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::MissingEnvVar { .. } => io::ErrorKind::NotFound,
            AppError::InvalidVariant(_) | AppError::Template(_) => io::ErrorKind::InvalidInput,
            AppError::CaskOutOfDate { .. } => io::ErrorKind::Other,
        }
    }
}
