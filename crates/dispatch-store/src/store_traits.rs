//! Storage trait definitions for the dispatch service
//!
//! A `SnapshotStore` fronts one backing store holding one JSON document
//! (in production, a single file on disk). The capability set is
//! deliberately whole-snapshot:
//! - `read_all`: the full current snapshot
//! - `write_all`: replace the snapshot, atomically with respect to readers
//!
//! Record-level parsing lives above this layer; the store moves opaque
//! bytes. In-memory fakes are provided for testing via the `fakes` module.

use async_trait::async_trait;

use crate::error::StoreError;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Whole-snapshot byte store.
///
/// Guarantees:
/// - `read_all` returns exactly the bytes of the most recent completed
///   `write_all`.
/// - A store that has never been written reads as `StoreError::NotFound`,
///   never as an empty byte sequence.
/// - `write_all` is atomic with respect to readers: a concurrent `read_all`
///   observes either the previous snapshot or the new one, never a prefix
///   of the new one.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the full current snapshot.
    async fn read_all(&self) -> StoreResult<Vec<u8>>;

    /// Replace the snapshot with `data`.
    async fn write_all(&self, data: &[u8]) -> StoreResult<()>;

    /// Identifier used in errors and logs (the file path in production).
    fn label(&self) -> &str;
}
