//! Whole-file JSON array access.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{RpmError, RpmResult};

/// One store file: a pretty-printed JSON array of records.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn malformed(&self, reason: impl Into<String>) -> RpmError {
        RpmError::MalformedStore {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    /// Read and parse the whole file. A missing file counts as malformed.
    pub fn read_all<R: DeserializeOwned>(&self) -> RpmResult<Vec<R>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => self.malformed("store file does not exist"),
            _ => RpmError::Io(e),
        })?;

        serde_json::from_str(&content).map_err(|e| self.malformed(e.to_string()))
    }

    /// Replace the file with `records`.
    ///
    /// Writes a sibling temp file first and renames it into place, so a
    /// reader sees either the old array or the new one.
    pub fn write_all<R: Serialize>(&self, records: &[R]) -> RpmResult<()> {
        let content = serde_json::to_string_pretty(records)
            .map_err(|e| RpmError::invalid(format!("could not serialize records: {e}")))?;

        let temp = self.temp_path();
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }

    /// Create the parent directory and an empty `[]` file if needed.
    /// Returns true if the file was created.
    pub fn ensure_exists(&self) -> RpmResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.write_all::<serde_json::Value>(&[])?;
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
