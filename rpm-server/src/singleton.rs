//! Singleton pattern to ensure only one rpm-server instance serves a data directory.

use std::path::Path;

use anyhow::{Context, Result};
use rpm_core::store::lock::{self, StoreLock};

/// Acquire an exclusive lock, failing if another instance is running
pub fn acquire_lock(data_dir: &Path) -> Result<StoreLock> {
    let path = data_dir.join("server.lock");

    lock::try_exclusive(&path)
        .context("Failed to create lock file")?
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Another rpm-server instance is already running on {}.\n\
                If you believe this is an error, remove: {}",
                data_dir.display(),
                path.display()
            )
        })
}
