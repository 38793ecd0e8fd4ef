//! Dispatch-Store: Snapshot-File Backend for the Dispatch Service
//!
//! This crate provides the persistence layer for the technician dispatch
//! service. Each backing store is one JSON document (a file in production,
//! a byte buffer in the in-memory fake); the layer moves whole snapshots
//! and leaves record-level parsing to the domain above it.
//!
//! ## Key Components
//!
//! - `SnapshotStore`: whole-snapshot read/replace trait
//! - `JsonFileStore`: file-backed implementation with atomic rename writes
//! - `fakes::MemorySnapshotStore`: in-memory implementation for tests

mod error;
pub mod fakes;
mod fs;
pub mod store_traits;

pub use error::StoreError;
pub use fs::JsonFileStore;
pub use store_traits::{SnapshotStore, StoreResult};
