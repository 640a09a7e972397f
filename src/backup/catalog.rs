//! Snapshot listing and restore-source resolution
//!
//! Snapshot directories are named `YYYYMMDD-HHMMSS`, so sorting by name is
//! the same as sorting by creation time. Nothing here looks at mtimes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::copy::count_files;
use crate::error::{FedcareError, FedcareResult};

/// A snapshot directory found under the backup root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotInfo {
    /// Directory name (the timestamp)
    pub name: String,
    /// Full path to the snapshot
    pub path: PathBuf,
    /// Number of regular files captured
    pub files: usize,
}

/// Where a restore should read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreSource {
    /// The newest snapshot under the backup root
    Latest,
    /// A snapshot name under the root, or an absolute path
    Named(String),
}

/// What `fedcare restore` was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreRequest {
    List,
    Restore(RestoreSource),
}

impl RestoreRequest {
    /// Interpret the restore flags. `--list` wins over `--latest`, which
    /// wins over `--source`.
    pub fn from_flags(list: bool, latest: bool, source: Option<String>) -> FedcareResult<Self> {
        if list {
            Ok(Self::List)
        } else if latest {
            Ok(Self::Restore(RestoreSource::Latest))
        } else if let Some(name) = source.filter(|s| !s.is_empty()) {
            Ok(Self::Restore(RestoreSource::Named(name)))
        } else {
            Err(FedcareError::NoSourceSpecified)
        }
    }
}

/// Names of the snapshot directories directly under `root`
fn snapshot_dirs(root: &Path) -> FedcareResult<Vec<(String, PathBuf)>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)
        .map_err(|e| FedcareError::Io(format!("Failed to read backup directory: {}", e)))?
    {
        let entry = entry
            .map_err(|e| FedcareError::Io(format!("Failed to read directory entry: {}", e)))?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }

    // Newest first
    dirs.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(dirs)
}

/// List every snapshot under `root`, newest first
///
/// A missing root is a normal state and yields an empty list.
pub fn list_snapshots(root: &Path) -> FedcareResult<Vec<SnapshotInfo>> {
    let snapshots = snapshot_dirs(root)?
        .into_iter()
        .map(|(name, path)| SnapshotInfo {
            files: count_files(&path),
            name,
            path,
        })
        .collect::<Vec<_>>();

    debug!(root = %root.display(), count = snapshots.len(), "listed snapshots");
    Ok(snapshots)
}

/// Resolve a restore source to an existing snapshot directory
pub fn resolve_source(root: &Path, source: &RestoreSource) -> FedcareResult<PathBuf> {
    let path = match source {
        RestoreSource::Latest => snapshot_dirs(root)?
            .into_iter()
            .next()
            .map(|(_, path)| path)
            .ok_or_else(|| FedcareError::NoBackupsFound {
                root: root.to_path_buf(),
            })?,
        RestoreSource::Named(name) => {
            let candidate = Path::new(name);
            if candidate.is_absolute() {
                candidate.to_path_buf()
            } else {
                root.join(candidate)
            }
        }
    };

    if !path.is_dir() {
        return Err(FedcareError::BackupNotFound { path });
    }

    debug!(source = %path.display(), "resolved restore source");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_snapshot(root: &Path, name: &str, files: &[&str]) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            let path = dir.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "x").unwrap();
        }
        dir
    }

    #[test]
    fn test_list_absent_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let snapshots = list_snapshots(&temp.path().join("fedcare-backup")).unwrap();
        assert!(snapshots.is_empty());
    }

    #[test]
    fn test_list_empty_root_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(list_snapshots(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_newest_first_with_counts() {
        let temp = TempDir::new().unwrap();
        make_snapshot(temp.path(), "20240101-000000", &["etc/hosts"]);
        make_snapshot(
            temp.path(),
            "20240615-120000",
            &["etc/hosts", "etc/NetworkManager/conf.d/a.conf"],
        );
        make_snapshot(temp.path(), "20231231-235959", &[]);
        // Stray files in the root are not snapshots
        fs::write(temp.path().join("notes.txt"), "hi").unwrap();

        let snapshots = list_snapshots(temp.path()).unwrap();
        let names: Vec<_> = snapshots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["20240615-120000", "20240101-000000", "20231231-235959"]
        );
        assert_eq!(snapshots[0].files, 2);
        assert_eq!(snapshots[1].files, 1);
        assert_eq!(snapshots[2].files, 0);
    }

    #[test]
    fn test_request_from_flags() {
        assert_eq!(
            RestoreRequest::from_flags(true, true, Some("x".into())).unwrap(),
            RestoreRequest::List
        );
        assert_eq!(
            RestoreRequest::from_flags(false, true, None).unwrap(),
            RestoreRequest::Restore(RestoreSource::Latest)
        );
        assert_eq!(
            RestoreRequest::from_flags(false, false, Some("20240101-000000".into())).unwrap(),
            RestoreRequest::Restore(RestoreSource::Named("20240101-000000".into()))
        );
        assert!(matches!(
            RestoreRequest::from_flags(false, false, None),
            Err(FedcareError::NoSourceSpecified)
        ));
    }

    #[test]
    fn test_resolve_latest() {
        let temp = TempDir::new().unwrap();
        make_snapshot(temp.path(), "20240101-000000", &[]);
        let newest = make_snapshot(temp.path(), "20240615-120000", &[]);

        let resolved = resolve_source(temp.path(), &RestoreSource::Latest).unwrap();
        assert_eq!(resolved, newest);
    }

    #[test]
    fn test_resolve_latest_without_backups() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("fedcare-backup");

        let err = resolve_source(&root, &RestoreSource::Latest).unwrap_err();
        assert!(matches!(err, FedcareError::NoBackupsFound { .. }));
        assert!(!root.exists());

        fs::create_dir_all(&root).unwrap();
        let err = resolve_source(&root, &RestoreSource::Latest).unwrap_err();
        assert!(matches!(err, FedcareError::NoBackupsFound { .. }));
    }

    #[test]
    fn test_resolve_relative_and_absolute_agree() {
        let temp = TempDir::new().unwrap();
        let snapshot = make_snapshot(temp.path(), "20240101-000000", &[]);

        let relative =
            resolve_source(temp.path(), &RestoreSource::Named("20240101-000000".into())).unwrap();
        let absolute = resolve_source(
            Path::new("/unrelated/root"),
            &RestoreSource::Named(snapshot.to_string_lossy().into_owned()),
        )
        .unwrap();

        assert_eq!(relative, snapshot);
        assert_eq!(absolute, snapshot);
    }

    #[test]
    fn test_resolve_missing_named() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("20240101-000000"), "not a dir").unwrap();

        let err =
            resolve_source(temp.path(), &RestoreSource::Named("20991231-000000".into())).unwrap_err();
        assert!(matches!(err, FedcareError::BackupNotFound { .. }));

        let err =
            resolve_source(temp.path(), &RestoreSource::Named("20240101-000000".into())).unwrap_err();
        assert!(matches!(err, FedcareError::BackupNotFound { .. }));
    }
}
