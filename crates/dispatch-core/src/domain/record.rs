//! Task, assignment, and prediction records.
//!
//! Field names on the wire are fixed by the stored JSON documents and the
//! external prediction pipeline that produces them; the serde renames are
//! the contract, not a styling choice.

use serde::{Deserialize, Serialize};

use super::signature::TaskSignature;

/// A submitted task awaiting assignment.
///
/// Tasks carry no identifier; the (priority, duration, distance) tuple is
/// their structural identity (see [`TaskSignature`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Urgency rank assigned by the submitter.
    #[serde(rename = "Task Priority")]
    pub priority: i64,

    /// Estimated duration in hours.
    #[serde(rename = "Task Duration")]
    pub duration_hours: f64,

    /// Travel distance to the task site in kilometres.
    #[serde(rename = "Distance to Task in km")]
    pub distance_km: i64,
}

impl Task {
    /// Structural identity of this task.
    pub fn signature(&self) -> TaskSignature {
        TaskSignature::new(self.priority, self.duration_hours, self.distance_km)
    }
}

/// One historical technician-to-task assignment.
///
/// Rows of the assignment ledger are written by the completed-work pipeline
/// and never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedTask {
    #[serde(rename = "Technician ID")]
    pub technician_id: String,

    #[serde(rename = "Task Priority")]
    pub priority: i64,

    #[serde(rename = "Task Duration")]
    pub duration_hours: f64,

    #[serde(rename = "Distance to Task in km")]
    pub distance_km: i64,
}

/// One candidate technician scored against one task by the external
/// prediction pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(rename = "Technician ID")]
    pub technician_id: String,

    #[serde(rename = "Task Priority")]
    pub priority: i64,

    #[serde(rename = "Task Duration")]
    pub duration_hours: f64,

    #[serde(rename = "Distance to Task in km")]
    pub distance_km: i64,

    /// Completion probability, nominally in [0, 1]. Compared as-is during
    /// selection, never clamped.
    pub probability: f64,
}

impl PredictionRecord {
    /// Grouping key for this record.
    pub fn signature(&self) -> TaskSignature {
        TaskSignature::new(self.priority, self.duration_hours, self.distance_km)
    }
}

/// The winning candidate for one task signature, as served to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "Technician ID")]
    pub technician_id: String,

    #[serde(rename = "Task Priority")]
    pub priority: i64,

    #[serde(rename = "Task Duration")]
    pub duration_hours: f64,

    #[serde(rename = "Distance to Task in km")]
    pub distance_km: i64,
}

impl From<&PredictionRecord> for Assignment {
    fn from(record: &PredictionRecord) -> Self {
        Self {
            technician_id: record.technician_id.clone(),
            priority: record.priority,
            duration_hours: record.duration_hours,
            distance_km: record.distance_km,
        }
    }
}
