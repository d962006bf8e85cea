//! Error types for loading and resolving trajectories

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving, reading or parsing a trajectory
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrajectoryError {
    /// Identifier missing from the lookup table
    #[error("Unknown trajectory identifier: {0}")]
    UnknownId(String),

    /// Resolved resource does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Resource is not valid JSON or lacks the expected shape
    #[error("Malformed trajectory {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// Config file could not be parsed
    #[error("Invalid config {}: {reason}", path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    /// Resource could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TrajectoryError {
    /// Whether this error belongs to the not-found class
    /// (unknown identifier or missing file).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownId(_) | Self::NotFound(_))
    }

    /// Whether this error belongs to the malformed-data class.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io { path, source }
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrajectoryError>;
