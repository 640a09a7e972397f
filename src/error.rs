//! Custom error types for fedcare
//!
//! Only command-level failures live here. Per-file outcomes of a backup or
//! restore are reported through [`crate::backup::CopyStatus`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for fedcare operations
#[derive(Error, Debug)]
pub enum FedcareError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// `--latest` was requested but the backup root holds no snapshots
    #[error("No backups found in {}", .root.display())]
    NoBackupsFound { root: PathBuf },

    /// The resolved restore source is missing or not a directory
    #[error("Backup not found: {}", .path.display())]
    BackupNotFound { path: PathBuf },

    /// `restore` was invoked without `--list`, `--latest` or `--source`
    #[error("No restore source specified: use --list, --latest or --source <NAME|PATH>")]
    NoSourceSpecified,
}

impl FedcareError {
    /// Check if this is a usage error rather than a filesystem problem
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::NoSourceSpecified)
    }

    /// Check if this error means the requested backup does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoBackupsFound { .. } | Self::BackupNotFound { .. })
    }

    /// Process exit code: 2 for usage errors, 3 for a missing backup, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.is_usage() {
            2
        } else if self.is_not_found() {
            3
        } else {
            1
        }
    }
}

impl From<std::io::Error> for FedcareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FedcareError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fedcare operations
pub type FedcareResult<T> = Result<T, FedcareError>;
