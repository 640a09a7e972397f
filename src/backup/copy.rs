//! Filesystem copy helpers shared by snapshot and restore

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Map an absolute live-system path to its location inside a snapshot
///
/// Only normal components are kept, so `/etc/NetworkManager/` becomes
/// `etc/NetworkManager`.
pub fn snapshot_relative(target: &Path) -> PathBuf {
    target
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// Copy a regular file, keeping permission bits and modification time
pub fn copy_file_preserving(src: &Path, dst: &Path) -> io::Result<()> {
    let metadata = fs::metadata(src)?;

    // fs::copy carries the permission bits over
    fs::copy(src, dst)?;

    let modified = metadata.modified()?;
    fs::File::open(dst)?.set_modified(modified)?;

    Ok(())
}

/// Create the parent directories of `dst`, then copy `src` onto it
pub fn copy_file_with_parents(src: &Path, dst: &Path) -> io::Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    copy_file_preserving(src, dst)
}

/// Recursively copy a directory tree into `dst`, merging with whatever is
/// already there. Existing files with the same name are overwritten.
///
/// Unreadable entries and dangling links do not stop the walk. Everything
/// readable is copied, and the first error hit along the way is returned.
pub fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    let mut first_error: Option<io::Error> = None;

    for entry in WalkDir::new(src).follow_links(true) {
        let copied = entry.map_err(io::Error::from).and_then(|entry| {
            let relative = entry
                .path()
                .strip_prefix(src)
                .map_err(io::Error::other)?;
            let target = dst.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)
            } else {
                copy_file_preserving(entry.path(), &target)
            }
        });

        if let Err(e) = copied {
            debug!(error = %e, "skipping entry during tree copy");
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Count regular files below `dir`, skipping entries that cannot be read
pub fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}
