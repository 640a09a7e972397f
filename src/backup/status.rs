//! Per-item outcome of a backup or restore copy

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

/// Outcome of copying one target (backup) or one file (restore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStatus {
    /// Copied directly
    Ok,
    /// Copied through the privileged helper after a permission failure
    OkElevated,
    /// The source does not exist
    NotFound,
    /// Access was refused (after elevation, for restores)
    PermissionDenied,
    /// Any other failure, with the underlying description
    Failed(String),
}

impl CopyStatus {
    /// Classify an I/O error into a status
    pub fn from_io_error(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Failed(err.to_string()),
        }
    }

    /// True for `Ok` and `OkElevated`
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok | Self::OkElevated)
    }
}

impl fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::OkElevated => write!(f, "OK (elevated)"),
            Self::NotFound => write!(f, "NotFound"),
            Self::PermissionDenied => write!(f, "PermissionDenied"),
            Self::Failed(message) => write!(f, "{}", message),
        }
    }
}

impl Serialize for CopyStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One line of a backup or restore report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyResult {
    /// Live-system path the copy refers to
    pub path: PathBuf,
    pub status: CopyStatus,
}

impl CopyResult {
    pub fn new(path: impl Into<PathBuf>, status: CopyStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}
