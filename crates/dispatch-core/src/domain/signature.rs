//! Structural task identity.

use serde::{Deserialize, Serialize};

/// Granularity at which task durations participate in identity: durations
/// are carried in hundredths of an hour (36-second resolution).
pub const SIGNATURE_DURATION_SCALE: f64 = 100.0;

/// Grouping key for records that describe the same logical task.
///
/// Tasks carry no identifier of their own, so the (priority, duration,
/// distance) tuple stands in for one. Duration enters the key at an
/// explicit precision, hundredths of an hour, rounded half away from zero.
/// Two durations that agree to that precision produce the same signature;
/// representation noise beyond it is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskSignature {
    /// Urgency rank.
    pub priority: i64,

    /// Duration in hundredths of an hour.
    pub duration_centi_hours: i64,

    /// Travel distance in kilometres.
    pub distance_km: i64,
}

impl TaskSignature {
    /// Build a signature from raw record fields.
    pub fn new(priority: i64, duration_hours: f64, distance_km: i64) -> Self {
        Self {
            priority,
            duration_centi_hours: (duration_hours * SIGNATURE_DURATION_SCALE).round() as i64,
            distance_km,
        }
    }

    /// Duration in hours at signature precision.
    pub fn duration_hours(&self) -> f64 {
        self.duration_centi_hours as f64 / SIGNATURE_DURATION_SCALE
    }
}

impl std::fmt::Display for TaskSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{:.2}-{}",
            self.priority,
            self.duration_hours(),
            self.distance_km
        )
    }
}
