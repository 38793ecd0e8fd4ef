//! In-memory fakes for storage traits (testing only)
//!
//! Provides `MemorySnapshotStore`, which satisfies the `SnapshotStore`
//! contract without touching the filesystem.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::store_traits::{SnapshotStore, StoreResult};

/// In-memory snapshot store backed by a `Mutex<Option<Vec<u8>>>`.
///
/// `None` models a store that has never been written, matching the
/// file-backed store's missing-file state.
#[derive(Debug)]
pub struct MemorySnapshotStore {
    label: String,
    snapshot: Mutex<Option<Vec<u8>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::named("memory")
    }

    /// A store whose errors identify it by `label`.
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            snapshot: Mutex::new(None),
        }
    }

    /// A store pre-loaded with `data`, for seeding read-only stores in tests.
    pub fn seeded(label: impl Into<String>, data: &[u8]) -> Self {
        Self {
            label: label.into(),
            snapshot: Mutex::new(Some(data.to_vec())),
        }
    }
}

impl Default for MemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn read_all(&self) -> StoreResult<Vec<u8>> {
        let snapshot = self.snapshot.lock().unwrap();
        snapshot.clone().ok_or_else(|| StoreError::NotFound {
            store: self.label.clone(),
        })
    }

    async fn write_all(&self, data: &[u8]) -> StoreResult<()> {
        let mut snapshot = self.snapshot.lock().unwrap();
        *snapshot = Some(data.to_vec());
        Ok(())
    }

    fn label(&self) -> &str {
        &self.label
    }
}
