//! Ensure only one scheduler-server instance owns a database file.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// A lock guard that releases the lock when dropped
pub struct LockGuard {
    _file: File,
}

fn lock_path(db_file: &Path) -> PathBuf {
    let mut path = db_file.as_os_str().to_owned();
    path.push(".lock");
    PathBuf::from(path)
}

/// Acquire an exclusive lock next to `db_file`, failing if another instance holds it
pub fn acquire_lock(db_file: &Path) -> Result<LockGuard> {
    let path = lock_path(db_file);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let file = File::create(&path).context("Failed to create lock file")?;

    file.try_lock_exclusive().map_err(|_| {
        anyhow::anyhow!(
            "Another scheduler-server instance is already using {}.\n\
            If you believe this is an error, remove: {}",
            db_file.display(),
            path.display()
        )
    })?;

    Ok(LockGuard { _file: file })
}
