//! Error types for dispatch-store

use thiserror::Error;

/// Errors that can occur in the snapshot persistence layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store has never been written
    #[error("store not found: {store}")]
    NotFound { store: String },

    /// Read or write failed for a reason other than absence
    #[error("store io failure on {store}: {source}")]
    Io {
        store: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// True when the error means the store simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
