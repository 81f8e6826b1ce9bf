//! Advisory locks that serialize access to one store file.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use fs2::FileExt;

use crate::error::{RpmError, RpmResult};

/// Holds the lock until dropped.
pub struct StoreLock {
    _file: File,
}

fn open(path: &Path) -> RpmResult<File> {
    File::options()
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => RpmError::MalformedStore {
                path: path.to_path_buf(),
                reason: "data directory does not exist".into(),
            },
            _ => RpmError::Io(e),
        })
}

/// Block until no other reader or writer holds the lock.
pub fn exclusive(path: &Path) -> RpmResult<StoreLock> {
    let file = open(path)?;
    FileExt::lock_exclusive(&file)?;
    Ok(StoreLock { _file: file })
}

/// Block until no writer holds the lock.
pub fn shared(path: &Path) -> RpmResult<StoreLock> {
    let file = open(path)?;
    FileExt::lock_shared(&file)?;
    Ok(StoreLock { _file: file })
}

/// Take the lock without waiting, or fail if someone else holds it.
pub fn try_exclusive(path: &Path) -> RpmResult<Option<StoreLock>> {
    let file = open(path)?;
    match FileExt::try_lock_exclusive(&file) {
        Ok(()) => Ok(Some(StoreLock { _file: file })),
        Err(e) if e.kind() == fs2::lock_contended_error().kind() => Ok(None),
        Err(e) => Err(RpmError::Io(e)),
    }
}
