//! Durable repository of submitted tasks.

use std::sync::Arc;

use dispatch_store::SnapshotStore;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::{DispatchError, Result, Task};

/// Append-only repository of submitted tasks, backed by one snapshot store
/// holding a JSON array.
///
/// `add` is a full read-modify-write of the backing snapshot. The write
/// mutex is held across the whole sequence so two concurrent adds cannot
/// both read the same prior list and drop one another's task.
pub struct TaskRepository {
    store: Arc<dyn SnapshotStore>,
    write_lock: Mutex<()>,
}

impl TaskRepository {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Append `task` after all previously submitted tasks.
    ///
    /// A store that has never been written counts as an empty list, so the
    /// first add creates it. A store that exists but does not parse fails
    /// the add without touching storage.
    pub async fn add(&self, task: Task) -> Result<()> {
        let _writer = self.write_lock.lock().await;

        let mut tasks = match self.store.read_all().await {
            Ok(bytes) => self.parse(&bytes)?,
            Err(err) if err.is_not_found() => Vec::new(),
            Err(err) => return Err(err.into()),
        };

        tasks.push(task);
        let snapshot = serde_json::to_vec_pretty(&tasks).map_err(|source| DispatchError::Io {
            store: self.store.label().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, source),
        })?;
        self.store.write_all(&snapshot).await?;

        info!(
            event = "task.added",
            priority = task.priority,
            distance_km = task.distance_km,
            total = tasks.len()
        );
        Ok(())
    }

    /// All submitted tasks in submission order.
    ///
    /// Absence of the store is `NotFound`, distinct from an empty list:
    /// callers can tell "nothing ever submitted" from "store unreadable".
    pub async fn list(&self) -> Result<Vec<Task>> {
        let bytes = self.store.read_all().await?;
        self.parse(&bytes)
    }

    fn parse(&self, bytes: &[u8]) -> Result<Vec<Task>> {
        serde_json::from_slice(bytes).map_err(|source| DispatchError::CorruptStore {
            store: self.store.label().to_string(),
            source,
        })
    }
}
