//! JSON-file backed repositories, one per resource.
//!
//! Every operation loads the whole store file, changes it in memory, and
//! writes the whole file back. An advisory lock on a sidecar `.lock` file is
//! held for the full read-modify-write, so concurrent writers (threads of the
//! server or a separate `rpm` process) are serialized instead of losing
//! each other's updates.

mod create;
mod delete;
mod file;
mod list;
pub mod lock;
mod update;

pub use file::JsonFile;

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::error::{RpmError, RpmResult};
use crate::model::{CalendarEvent, Category, RpmBlock};
use crate::record::Record;

/// Repository for one resource type.
pub struct Store<R> {
    file: JsonFile,
    lock_path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for Store<R> {
    fn clone(&self) -> Self {
        Store {
            file: self.file.clone(),
            lock_path: self.lock_path.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> Store<R> {
    /// The store for `R` inside `data_dir`.
    pub fn open(data_dir: &Path) -> Self {
        Self::at(data_dir.join(R::RESOURCE.file_name()))
    }

    /// A store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut lock_name = path.file_name().unwrap_or_default().to_os_string();
        lock_name.push(".lock");

        Store {
            lock_path: path.with_file_name(lock_name),
            file: JsonFile::new(path),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn label(&self) -> &'static str {
        R::RESOURCE.label()
    }

    /// Create an empty store file if there is none.
    pub fn ensure_exists(&self) -> RpmResult<bool> {
        if let Some(parent) = self.path().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let _lock = lock::exclusive(&self.lock_path)?;
        self.file.ensure_exists()
    }

    fn not_found(&self, id: &str) -> RpmError {
        tracing::debug!(resource = R::RESOURCE.slug(), id, "record not found");
        RpmError::NotFound {
            label: self.label(),
            id: id.to_string(),
        }
    }
}

/// The three stores of one data directory.
#[derive(Clone)]
pub struct Stores {
    pub categories: Store<Category>,
    pub calendar_events: Store<CalendarEvent>,
    pub rpm_blocks: Store<RpmBlock>,
}

impl Stores {
    pub fn open(data_dir: &Path) -> Self {
        Stores {
            categories: Store::open(data_dir),
            calendar_events: Store::open(data_dir),
            rpm_blocks: Store::open(data_dir),
        }
    }

    /// Create any missing store files. Returns the paths that were created.
    pub fn ensure_all(&self) -> RpmResult<Vec<PathBuf>> {
        let mut created = Vec::new();
        if self.categories.ensure_exists()? {
            created.push(self.categories.path().to_path_buf());
        }
        if self.calendar_events.ensure_exists()? {
            created.push(self.calendar_events.path().to_path_buf());
        }
        if self.rpm_blocks.ensure_exists()? {
            created.push(self.rpm_blocks.path().to_path_buf());
        }
        Ok(created)
    }
}
