//! Read side of the prediction batch store.

use std::sync::Arc;

use dispatch_store::SnapshotStore;

use crate::domain::{DispatchError, PredictionRecord, Result};

/// Read-only view over the scored prediction batch.
///
/// The batch is written by the external scoring pipeline as a JSON array
/// of candidate records; this service loads it for selection and never
/// writes it.
pub struct PredictionStore {
    store: Arc<dyn SnapshotStore>,
}

impl PredictionStore {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// The current prediction batch in stored order.
    pub async fn latest(&self) -> Result<Vec<PredictionRecord>> {
        let bytes = self.store.read_all().await?;
        serde_json::from_slice(&bytes).map_err(|source| DispatchError::CorruptStore {
            store: self.store.label().to_string(),
            source,
        })
    }
}
