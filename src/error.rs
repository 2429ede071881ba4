use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating or reading a tabular number source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("path points to a directory, not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("unsupported file format (expected .xlsx or .csv): {}", .0.display())]
    WrongFormat(PathBuf),

    #[error("cannot read {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },
}

impl SourceError {
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        SourceError::Unreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied an empty dataset or a rank outside `1..=len`.
    #[error("{0}")]
    InvalidArgument(String),

    /// The selection engine reached a state its entry contract rules out.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn invariant_violation(msg: impl Into<String>) -> Self {
        Error::InvariantViolation(msg.into())
    }

    /// Returns true when the failure stems from caller-supplied input.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::InvalidArgument(_) => true,
            Error::InvariantViolation(_) => false,
            Error::Source(SourceError::Unreadable { .. }) => false,
            Error::Source(_) => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
