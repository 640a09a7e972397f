//! Snapshot writer
//!
//! Copies each configuration target into a fresh timestamped directory that
//! mirrors the root filesystem layout. Targets are handled independently:
//! a missing or unreadable target is recorded and the rest still run.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::copy::{copy_file_with_parents, copy_tree, snapshot_relative};
use super::status::{CopyResult, CopyStatus};
use crate::error::{FedcareError, FedcareResult};

/// Snapshot directory name format; sorts chronologically as a string
pub const SNAPSHOT_NAME_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Build `<root>/<YYYYMMDD-HHMMSS>` for the given instant
pub fn default_destination<Tz>(root: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    root.join(now.format(SNAPSHOT_NAME_FORMAT).to_string())
}

/// Result of writing one snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotReport {
    /// Snapshot directory
    pub dest: PathBuf,
    /// One entry per target, in target order
    pub files: Vec<CopyResult>,
}

impl SnapshotReport {
    /// Number of targets copied successfully
    pub fn copied(&self) -> usize {
        self.files.iter().filter(|r| r.status.is_ok()).count()
    }
}

/// Copies a fixed list of targets into snapshot directories
pub struct SnapshotWriter {
    targets: Vec<PathBuf>,
}

impl SnapshotWriter {
    pub fn new(targets: Vec<PathBuf>) -> Self {
        Self { targets }
    }

    /// Create `dest` and copy every target into it
    ///
    /// Fails only if `dest` itself cannot be created. Per-target failures
    /// are reported in the returned [`SnapshotReport`].
    pub fn write(&self, dest: &Path) -> FedcareResult<SnapshotReport> {
        fs::create_dir_all(dest).map_err(|e| {
            FedcareError::Io(format!(
                "Failed to create backup directory {}: {}",
                dest.display(),
                e
            ))
        })?;

        let files = self
            .targets
            .iter()
            .map(|target| CopyResult::new(target, capture_target(target, dest)))
            .collect::<Vec<_>>();

        let report = SnapshotReport {
            dest: dest.to_path_buf(),
            files,
        };
        info!(
            dest = %dest.display(),
            copied = report.copied(),
            total = report.files.len(),
            "snapshot written"
        );
        Ok(report)
    }
}

/// Copy a single target under `dest`. Never elevates.
fn capture_target(target: &Path, dest: &Path) -> CopyStatus {
    let metadata = match fs::metadata(target) {
        Ok(metadata) => metadata,
        Err(e) => {
            let status = CopyStatus::from_io_error(&e);
            debug!(target = %target.display(), %status, "target not captured");
            return status;
        }
    };

    let dst = dest.join(snapshot_relative(target));
    let copied = if metadata.is_dir() {
        copy_tree(target, &dst)
    } else if metadata.is_file() {
        copy_file_with_parents(target, &dst)
    } else {
        // Sockets, fifos and devices are not configuration
        return CopyStatus::NotFound;
    };

    match copied {
        Ok(()) => {
            debug!(target = %target.display(), "target captured");
            CopyStatus::Ok
        }
        Err(e) => {
            warn!(target = %target.display(), error = %e, "failed to capture target");
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                CopyStatus::PermissionDenied
            } else {
                CopyStatus::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate};
    use tempfile::TempDir;

    struct LiveSystem {
        temp: TempDir,
    }

    impl LiveSystem {
        fn new() -> Self {
            Self {
                temp: TempDir::new().unwrap(),
            }
        }

        fn file(&self, rel: &str, contents: &str) -> PathBuf {
            let path = self.temp.path().join("live").join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, contents).unwrap();
            path
        }

        fn path(&self, rel: &str) -> PathBuf {
            self.temp.path().join("live").join(rel)
        }

        fn dest(&self) -> PathBuf {
            self.temp.path().join("backups").join("20240615-120000")
        }
    }

    #[test]
    fn test_default_destination_format() {
        let at = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 5)
            .unwrap()
            .and_utc();
        assert_eq!(
            default_destination(Path::new("/root/fedcare-backup"), &at),
            PathBuf::from("/root/fedcare-backup/20240615-120005")
        );

        // Local time works too and yields a well-formed name
        let local = default_destination(Path::new("/b"), &Local::now());
        assert_eq!(local.file_name().unwrap().len(), 15);
    }

    #[test]
    fn test_one_result_per_target_in_order() {
        let live = LiveSystem::new();
        let hosts = live.file("etc/hosts", "127.0.0.1 localhost\n");
        let missing = live.path("etc/default/grub");
        let nm = live.path("etc/NetworkManager");
        live.file("etc/NetworkManager/NetworkManager.conf", "[main]\n");

        let writer = SnapshotWriter::new(vec![hosts.clone(), missing.clone(), nm.clone()]);
        let report = writer.write(&live.dest()).unwrap();

        let paths: Vec<_> = report.files.iter().map(|r| r.path.clone()).collect();
        assert_eq!(paths, vec![hosts, missing, nm]);
        assert_eq!(report.files[0].status, CopyStatus::Ok);
        assert_eq!(report.files[1].status, CopyStatus::NotFound);
        assert_eq!(report.files[2].status, CopyStatus::Ok);
        assert_eq!(report.copied(), 2);
    }

    #[test]
    fn test_file_mirrored_under_snapshot() {
        let live = LiveSystem::new();
        let fstab = live.file("etc/fstab", "UUID=abc / ext4 defaults 0 1\n");

        let report = SnapshotWriter::new(vec![fstab.clone()])
            .write(&live.dest())
            .unwrap();

        let captured = report.dest.join(snapshot_relative(&fstab));
        assert_eq!(
            fs::read_to_string(captured).unwrap(),
            "UUID=abc / ext4 defaults 0 1\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_mode_bits_preserved() {
        use std::os::unix::fs::PermissionsExt;

        let live = LiveSystem::new();
        let sshd = live.file("etc/ssh/sshd_config", "PermitRootLogin no\n");
        fs::set_permissions(&sshd, fs::Permissions::from_mode(0o600)).unwrap();

        let report = SnapshotWriter::new(vec![sshd.clone()])
            .write(&live.dest())
            .unwrap();
        assert_eq!(report.files[0].status, CopyStatus::Ok);

        let captured = report.dest.join(snapshot_relative(&sshd));
        let mode = fs::metadata(captured).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_missing_target_creates_nothing() {
        let live = LiveSystem::new();
        let missing = live.path("etc/dnf/dnf.conf");

        let report = SnapshotWriter::new(vec![missing.clone()])
            .write(&live.dest())
            .unwrap();

        assert_eq!(report.files[0].status, CopyStatus::NotFound);
        assert!(!report.dest.join(snapshot_relative(&missing)).exists());
        assert!(report.dest.is_dir());
    }

    #[test]
    fn test_directory_target_merges_into_existing() {
        let live = LiveSystem::new();
        live.file("etc/NetworkManager/conf.d/dns.conf", "dns=default\n");
        let nm = live.path("etc/NetworkManager");
        let dest = live.dest();

        let writer = SnapshotWriter::new(vec![nm.clone()]);
        writer.write(&dest).unwrap();

        // Second run into the same destination overwrites instead of failing
        live.file("etc/NetworkManager/conf.d/dns.conf", "dns=systemd-resolved\n");
        let report = writer.write(&dest).unwrap();
        assert_eq!(report.files[0].status, CopyStatus::Ok);

        let captured = dest.join(snapshot_relative(&nm)).join("conf.d").join("dns.conf");
        assert_eq!(
            fs::read_to_string(captured).unwrap(),
            "dns=systemd-resolved\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_link_keeps_rest_of_directory() {
        let live = LiveSystem::new();
        for i in 0..20 {
            live.file(&format!("etc/NetworkManager/conf.d/{:02}.conf", i), "x\n");
        }
        let nm = live.path("etc/NetworkManager");
        std::os::unix::fs::symlink(live.path("nowhere"), nm.join("conf.d").join("m-dangling"))
            .unwrap();
        let hosts = live.file("etc/hosts", "127.0.0.1 localhost\n");

        let report = SnapshotWriter::new(vec![nm.clone(), hosts])
            .write(&live.dest())
            .unwrap();

        assert!(matches!(report.files[0].status, CopyStatus::Failed(_)));
        assert_eq!(report.files[1].status, CopyStatus::Ok);
        let captured = report.dest.join(snapshot_relative(&nm));
        assert_eq!(crate::backup::copy::count_files(&captured), 20);
    }

    #[test]
    fn test_uncreatable_destination_fails_whole_snapshot() {
        let live = LiveSystem::new();
        let blocker = live.file("blocker", "i am a file");

        let err = SnapshotWriter::new(vec![])
            .write(&blocker.join("20240615-120000"))
            .unwrap_err();
        assert!(matches!(err, FedcareError::Io(_)));
    }
}
