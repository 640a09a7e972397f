//! Restore executor
//!
//! Replays every file in a snapshot back to its original absolute path.
//! Each file is tried with a plain copy first; a permission failure is
//! retried once through the privileged helper. Nothing a single file does
//! can stop the walk.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::copy::copy_file_with_parents;
use super::status::{CopyResult, CopyStatus};
use crate::elevate::PrivilegedCopy;

/// Result of replaying one snapshot
#[derive(Debug, Clone, Serialize)]
pub struct RestoreReport {
    /// Snapshot that was replayed
    pub source: PathBuf,
    /// One entry per file found in the snapshot
    pub files: Vec<CopyResult>,
}

impl RestoreReport {
    /// Files that ended up in place, directly or elevated
    pub fn restored(&self) -> usize {
        self.files.iter().filter(|r| r.status.is_ok()).count()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn summary(&self) -> String {
        format!("Restored {}/{} file(s)", self.restored(), self.total())
    }
}

/// Replays snapshots onto the live filesystem
pub struct RestoreExecutor<'a> {
    privileged: &'a dyn PrivilegedCopy,
    target_root: PathBuf,
}

impl<'a> RestoreExecutor<'a> {
    /// Restore onto `/`, escalating through `privileged` when needed
    pub fn new(privileged: &'a dyn PrivilegedCopy) -> Self {
        Self {
            privileged,
            target_root: PathBuf::from("/"),
        }
    }

    /// Restore under another root instead of `/`, e.g. a staging tree
    pub fn with_target_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.target_root = root.into();
        self
    }

    /// Live path a snapshot file maps back to
    pub fn destination_for(&self, relative: &Path) -> PathBuf {
        self.target_root.join(relative)
    }

    /// Walk `source` and copy every regular file back into place
    pub fn restore(&self, source: &Path) -> RestoreReport {
        let mut files = Vec::new();

        for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(source).to_path_buf();
                    let status = CopyStatus::from_io_error(&io::Error::from(e));
                    warn!(path = %path.display(), %status, "could not read snapshot entry");
                    files.push(CopyResult::new(path, status));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = match entry.path().strip_prefix(source) {
                Ok(relative) => relative,
                Err(_) => continue,
            };
            let dst = self.destination_for(relative);
            let status = self.restore_file(entry.path(), &dst);
            files.push(CopyResult::new(dst, status));
        }

        let report = RestoreReport {
            source: source.to_path_buf(),
            files,
        };
        info!(
            source = %source.display(),
            restored = report.restored(),
            total = report.total(),
            "restore finished"
        );
        report
    }

    /// Direct copy, then one elevated retry on permission failure
    fn restore_file(&self, src: &Path, dst: &Path) -> CopyStatus {
        self.settle(copy_file_with_parents(src, dst), src, dst)
    }

    /// Turn the outcome of the direct copy into a final status, retrying
    /// through the privileged helper only on `PermissionDenied`
    fn settle(&self, direct: io::Result<()>, src: &Path, dst: &Path) -> CopyStatus {
        let err = match direct {
            Ok(()) => {
                debug!(path = %dst.display(), "restored");
                return CopyStatus::Ok;
            }
            Err(e) => e,
        };

        if err.kind() != io::ErrorKind::PermissionDenied {
            warn!(path = %dst.display(), error = %err, "restore failed");
            return CopyStatus::Failed(err.to_string());
        }

        warn!(path = %dst.display(), "permission denied, retrying elevated");
        match self.privileged.copy_elevated(src, dst) {
            Ok(true) => CopyStatus::OkElevated,
            Ok(false) => CopyStatus::PermissionDenied,
            Err(e) => {
                warn!(path = %dst.display(), error = %e, "could not start elevation helper");
                CopyStatus::PermissionDenied
            }
        }
    }
}
