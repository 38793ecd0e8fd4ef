//! Domain models for the dispatch service.
//!
//! Canonical definitions for the core entities:
//! - `Task`: A submitted task awaiting assignment
//! - `AssignedTask`: Historical technician-to-task assignment record
//! - `PredictionRecord`: Externally scored (technician, task) candidate
//! - `Assignment`: The winning candidate for one task signature
//! - `TaskSignature`: Structural identity of a task

pub mod error;
pub mod record;
pub mod signature;

// Re-export main types and errors
pub use error::{DispatchError, Result};
pub use record::{AssignedTask, Assignment, PredictionRecord, Task};
pub use signature::{TaskSignature, SIGNATURE_DURATION_SCALE};
