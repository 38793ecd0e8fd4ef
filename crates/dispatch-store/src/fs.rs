use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::StoreError;
use crate::store_traits::{SnapshotStore, StoreResult};

/// Filesystem-backed snapshot store: one JSON document per file.
///
/// Writes land in a temp file in the destination directory and are persisted
/// via rename, so a reader never observes a partially written snapshot.
pub struct JsonFileStore {
    path: PathBuf,
    label: String,
}

impl JsonFileStore {
    /// Create a store backed by `path`. Creates the parent directory if
    /// needed; the file itself is untouched until the first `write_all`.
    pub fn new(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let label = path.display().to_string();
        if let Some(dir) = parent_dir(&path) {
            fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                store: label.clone(),
                source,
            })?;
        }
        Ok(Self { path, label })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            store: self.label.clone(),
            source,
        }
    }
}

/// Parent directory of `path`, skipping the empty parent a bare file name has.
fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn read_all(&self) -> StoreResult<Vec<u8>> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound {
                    store: self.label.clone(),
                }
            } else {
                self.io_err(e)
            }
        })
    }

    async fn write_all(&self, data: &[u8]) -> StoreResult<()> {
        let dir = parent_dir(&self.path).unwrap_or_else(|| Path::new("."));

        // Atomic write: write to temp file in the same directory, then rename.
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_err(e))?;
        tmp.write_all(data).map_err(|e| self.io_err(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_err(e.error))?;

        debug!(event = "snapshot.persisted", store = %self.label, bytes = data.len());
        Ok(())
    }

    fn label(&self) -> &str {
        &self.label
    }
}
