//! Backup and restore display formatting

use std::path::Path;

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::backup::{CopyResult, RestoreReport, SnapshotInfo, SnapshotReport};

#[derive(Tabled)]
struct CopyRow {
    #[tabled(rename = "File")]
    path: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct SnapshotRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Files")]
    files: usize,
}

fn copy_table(results: &[CopyResult]) -> String {
    let rows = results.iter().map(|r| CopyRow {
        path: r.path.display().to_string(),
        status: r.status.to_string(),
    });
    Table::new(rows).with(Style::modern()).to_string()
}

/// Format the result of `fedcare backup`
pub fn format_snapshot_report(report: &SnapshotReport) -> String {
    let mut output = format!("Fedora Care - Backup -> {}\n", report.dest.display());
    output.push_str(&copy_table(&report.files));
    output.push('\n');
    output
}

/// JSON document for `fedcare restore --list`
#[derive(Serialize)]
pub struct SnapshotListDocument<'a> {
    pub backups: &'a [SnapshotInfo],
}

pub fn snapshot_list_document(snapshots: &[SnapshotInfo]) -> SnapshotListDocument<'_> {
    SnapshotListDocument { backups: snapshots }
}

/// Format the snapshot list, newest first
pub fn format_snapshot_list(root: &Path, snapshots: &[SnapshotInfo]) -> String {
    if snapshots.is_empty() {
        return format!(
            "No backups found in {}.\nCreate one with: fedcare backup\n",
            root.display()
        );
    }

    let rows = snapshots.iter().map(|s| SnapshotRow {
        name: s.name.clone(),
        path: s.path.display().to_string(),
        files: s.files,
    });

    let mut output = String::from("Fedora Care - Backups\n");
    output.push_str(&Table::new(rows).with(Style::modern()).to_string());
    output.push('\n');
    output.push_str(&format!("Total: {} backup(s)\n", snapshots.len()));
    output
}

/// JSON document for a finished restore
#[derive(Serialize)]
pub struct RestoreDocument<'a> {
    pub source: &'a Path,
    pub restored: usize,
    pub total: usize,
    pub files: &'a [CopyResult],
}

pub fn restore_document(report: &RestoreReport) -> RestoreDocument<'_> {
    RestoreDocument {
        source: &report.source,
        restored: report.restored(),
        total: report.total(),
        files: &report.files,
    }
}

/// Format a finished restore with its summary line
pub fn format_restore_report(report: &RestoreReport) -> String {
    let mut output = format!("Fedora Care - Restore <- {}\n", report.source.display());
    if report.files.is_empty() {
        output.push_str("Snapshot contains no files.\n");
    } else {
        output.push_str(&copy_table(&report.files));
        output.push('\n');
    }
    output.push_str(&report.summary());
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::CopyStatus;
    use std::path::PathBuf;

    fn sample_report() -> SnapshotReport {
        SnapshotReport {
            dest: PathBuf::from("/home/ada/fedcare-backup/20240615-120000"),
            files: vec![
                CopyResult::new("/etc/hosts", CopyStatus::Ok),
                CopyResult::new("/etc/default/grub", CopyStatus::NotFound),
            ],
        }
    }

    #[test]
    fn test_snapshot_report_table() {
        let output = format_snapshot_report(&sample_report());
        assert!(output.contains("20240615-120000"));
        assert!(output.contains("/etc/hosts"));
        assert!(output.contains("NotFound"));
    }

    #[test]
    fn test_snapshot_report_json() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["dest"], "/home/ada/fedcare-backup/20240615-120000");
        assert_eq!(json["files"][1]["path"], "/etc/default/grub");
        assert_eq!(json["files"][1]["status"], "NotFound");
    }

    #[test]
    fn test_empty_snapshot_list() {
        let output = format_snapshot_list(Path::new("/b"), &[]);
        assert!(output.starts_with("No backups found"));

        let json = serde_json::to_value(snapshot_list_document(&[])).unwrap();
        assert_eq!(json["backups"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_snapshot_list_table() {
        let snapshots = vec![SnapshotInfo {
            name: "20240615-120000".into(),
            path: PathBuf::from("/b/20240615-120000"),
            files: 7,
        }];
        let output = format_snapshot_list(Path::new("/b"), &snapshots);
        assert!(output.contains("20240615-120000"));
        assert!(output.contains("Total: 1 backup(s)"));
    }

    #[test]
    fn test_restore_document_counts() {
        let report = RestoreReport {
            source: PathBuf::from("/b/20240615-120000"),
            files: vec![
                CopyResult::new("/etc/hosts", CopyStatus::OkElevated),
                CopyResult::new("/etc/fstab", CopyStatus::PermissionDenied),
            ],
        };

        let json = serde_json::to_value(restore_document(&report)).unwrap();
        assert_eq!(json["restored"], 1);
        assert_eq!(json["total"], 2);
        assert_eq!(json["files"][0]["status"], "OK (elevated)");

        let output = format_restore_report(&report);
        assert!(output.contains("Restored 1/2 file(s)"));
        assert!(output.contains("PermissionDenied"));
    }
}
