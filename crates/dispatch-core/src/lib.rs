//! Dispatch Core Library
//!
//! Domain logic for the technician dispatch service:
//!
//! - `domain`: task, assignment, and prediction records plus the
//!   structural `TaskSignature` that stands in for a task id
//! - `repository`: durable, order-preserving store of submitted tasks
//! - `ledger`: per-technician queries over historical assignments
//! - `predictions`: read side of the externally scored candidate batch
//! - `selector`: best-candidate-per-signature reduction
//!
//! Persistence is delegated to `dispatch-store`; everything here works
//! against the `SnapshotStore` trait so tests run on the in-memory fake.

pub mod domain;
pub mod ledger;
pub mod metrics;
pub mod predictions;
pub mod repository;
pub mod selector;
pub mod telemetry;

pub use domain::{
    AssignedTask, Assignment, DispatchError, PredictionRecord, Result, Task, TaskSignature,
    SIGNATURE_DURATION_SCALE,
};
pub use ledger::AssignmentLedger;
pub use metrics::{Metrics, METRICS};
pub use predictions::PredictionStore;
pub use repository::TaskRepository;
pub use selector::select_best;
pub use telemetry::init_tracing;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
