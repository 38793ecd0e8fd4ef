//! Read side of the historical assignment ledger.

use std::sync::Arc;

use dispatch_store::SnapshotStore;

use crate::domain::{AssignedTask, DispatchError, Result};

/// Read-only view over the historical assignment records.
///
/// The ledger file is produced by the completed-work pipeline; this
/// service only filters it. Filtering is by exact technician id match,
/// preserving stored order.
pub struct AssignmentLedger {
    store: Arc<dyn SnapshotStore>,
}

impl AssignmentLedger {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// All assignment records for `technician_id`, in stored order.
    ///
    /// An unknown technician yields an empty list, not an error. An empty
    /// id is a caller error and is rejected before any store access.
    pub async fn assignments_for(&self, technician_id: &str) -> Result<Vec<AssignedTask>> {
        if technician_id.is_empty() {
            return Err(DispatchError::InvalidArgument(
                "technicianid is required".to_string(),
            ));
        }

        let bytes = self.store.read_all().await?;
        let records: Vec<AssignedTask> =
            serde_json::from_slice(&bytes).map_err(|source| DispatchError::CorruptStore {
                store: self.store.label().to_string(),
                source,
            })?;

        Ok(records
            .into_iter()
            .filter(|record| record.technician_id == technician_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_store::fakes::MemorySnapshotStore;

    fn seeded_ledger(json: &str) -> AssignmentLedger {
        AssignmentLedger::new(Arc::new(MemorySnapshotStore::seeded(
            "assignments",
            json.as_bytes(),
        )))
    }

    const HISTORY: &str = r#"[
        {"Technician ID": "tech-1", "Task Priority": 1, "Task Duration": 2.0, "Distance to Task in km": 5},
        {"Technician ID": "tech-2", "Task Priority": 2, "Task Duration": 1.0, "Distance to Task in km": 3},
        {"Technician ID": "tech-1", "Task Priority": 3, "Task Duration": 0.5, "Distance to Task in km": 8}
    ]"#;

    #[tokio::test]
    async fn filters_by_exact_technician_id() {
        let ledger = seeded_ledger(HISTORY);
        let records = ledger.assignments_for("tech-1").await.unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.technician_id == "tech-1"));
    }

    #[tokio::test]
    async fn preserves_stored_order() {
        let ledger = seeded_ledger(HISTORY);
        let records = ledger.assignments_for("tech-1").await.unwrap();

        assert_eq!(records[0].priority, 1);
        assert_eq!(records[1].priority, 3);
    }

    #[tokio::test]
    async fn unknown_technician_yields_empty_list() {
        let ledger = seeded_ledger(HISTORY);
        let records = ledger.assignments_for("tech-99").await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn id_match_is_exact_not_prefix() {
        let ledger = seeded_ledger(HISTORY);
        let records = ledger.assignments_for("tech").await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn empty_id_is_rejected_before_store_access() {
        // Store that has never been written: an empty id must fail as a
        // caller error, not as NotFound.
        let ledger = AssignmentLedger::new(Arc::new(MemorySnapshotStore::named("assignments")));
        let err = ledger.assignments_for("").await.unwrap_err();

        assert!(matches!(err, DispatchError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn missing_store_is_not_found() {
        let ledger = AssignmentLedger::new(Arc::new(MemorySnapshotStore::named("assignments")));
        let err = ledger.assignments_for("tech-1").await.unwrap_err();

        assert!(matches!(err, DispatchError::NotFound { .. }));
    }

    #[tokio::test]
    async fn corrupt_store_is_distinguished() {
        let ledger = seeded_ledger("[{ truncated");
        let err = ledger.assignments_for("tech-1").await.unwrap_err();

        assert!(matches!(err, DispatchError::CorruptStore { .. }));
    }
}
