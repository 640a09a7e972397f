//! Configuration snapshots for fedcare
//!
//! Captures a fixed set of system configuration files into timestamped
//! directories and replays them back onto the live system.
//!
//! # Architecture
//!
//! - `catalog`: lists snapshots and resolves `--latest` / `--source`
//! - `snapshot`: `SnapshotWriter`, creates a new snapshot
//! - `restore`: `RestoreExecutor`, replays a snapshot file by file
//! - `status`: per-item `CopyStatus` / `CopyResult`
//!
//! # Snapshot Layout
//!
//! ```text
//! ~/fedcare-backup/
//!   20240615-120000/
//!     etc/fstab
//!     etc/NetworkManager/...
//! ```
//!
//! Directory names sort chronologically, so the greatest name is the newest
//! snapshot.
//!
//! # Example
//!
//! ```rust,ignore
//! use fedcare::backup::{default_destination, RestoreExecutor, SnapshotWriter};
//! use fedcare::elevate::Elevator;
//!
//! let dest = default_destination(&root, &chrono::Local::now());
//! let report = SnapshotWriter::new(settings.targets.clone()).write(&dest)?;
//!
//! let elevator = Elevator::default();
//! let restored = RestoreExecutor::new(&elevator).restore(&report.dest);
//! println!("{}", restored.summary());
//! ```

mod catalog;
mod copy;
mod restore;
mod snapshot;
mod status;

pub use catalog::{list_snapshots, resolve_source, RestoreRequest, RestoreSource, SnapshotInfo};
pub use copy::snapshot_relative;
pub use restore::{RestoreExecutor, RestoreReport};
pub use snapshot::{default_destination, SnapshotReport, SnapshotWriter, SNAPSHOT_NAME_FORMAT};
pub use status::{CopyResult, CopyStatus};
