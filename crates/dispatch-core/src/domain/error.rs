//! Domain-level error taxonomy for the dispatch service.

use dispatch_store::StoreError;

/// Dispatch domain errors.
///
/// Every failure a dispatch operation can surface falls into exactly one
/// of these classes, so callers can tell a bad request from a missing
/// store from an unreadable one.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Submission payload malformed or empty. No state was mutated.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A required backing store has never been written.
    #[error("store not found: {store}")]
    NotFound { store: String },

    /// A backing store exists but its contents do not parse. Never
    /// treated as an empty store.
    #[error("corrupt store {store}: {source}")]
    CorruptStore {
        store: String,
        #[source]
        source: serde_json::Error,
    },

    /// A required request argument is missing or empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying storage failed for a reason other than absence or
    /// corruption.
    #[error("storage failure on {store}: {source}")]
    Io {
        store: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<StoreError> for DispatchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { store } => DispatchError::NotFound { store },
            StoreError::Io { store, source } => DispatchError::Io { store, source },
        }
    }
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
