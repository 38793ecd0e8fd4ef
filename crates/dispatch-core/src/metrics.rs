//! Global atomic counters for dispatch observability.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::render_text`] to expose current values in plain-text
//! exposition format, or [`Metrics::flush`] to emit them as a single
//! `tracing::info!` event.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Atomic counters over the service's request handling. Increments take
/// no locks, so handlers can bump them inline.
pub struct Metrics {
    tasks_submitted: AtomicU64,
    task_lists_served: AtomicU64,
    assignment_queries: AtomicU64,
    selections_computed: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            tasks_submitted: AtomicU64::new(0),
            task_lists_served: AtomicU64::new(0),
            assignment_queries: AtomicU64::new(0),
            selections_computed: AtomicU64::new(0),
        }
    }

    /// Increment the tasks-submitted counter by one.
    pub fn inc_tasks_submitted(&self) {
        self.tasks_submitted.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "tasks_submitted", "counter incremented");
    }

    /// Increment the task-lists-served counter by one.
    pub fn inc_task_lists_served(&self) {
        self.task_lists_served.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "task_lists_served", "counter incremented");
    }

    /// Increment the assignment-queries counter by one.
    pub fn inc_assignment_queries(&self) {
        self.assignment_queries.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "assignment_queries", "counter incremented");
    }

    /// Increment the selections-computed counter by one.
    pub fn inc_selections_computed(&self) {
        self.selections_computed.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "selections_computed", "counter incremented");
    }

    /// Emit all current counter values as a single `info!` event.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            tasks_submitted = self.tasks_submitted(),
            task_lists_served = self.task_lists_served(),
            assignment_queries = self.assignment_queries(),
            selections_computed = self.selections_computed(),
        );
    }

    /// Render current values in plain-text exposition format, one
    /// `dispatch_<counter> <value>` line per counter.
    pub fn render_text(&self) -> String {
        format!(
            "dispatch_tasks_submitted {}\n\
             dispatch_task_lists_served {}\n\
             dispatch_assignment_queries {}\n\
             dispatch_selections_computed {}\n",
            self.tasks_submitted(),
            self.task_lists_served(),
            self.assignment_queries(),
            self.selections_computed(),
        )
    }

    /// Read the current tasks-submitted count.
    pub fn tasks_submitted(&self) -> u64 {
        self.tasks_submitted.load(Ordering::Relaxed)
    }

    /// Read the current task-lists-served count.
    pub fn task_lists_served(&self) -> u64 {
        self.task_lists_served.load(Ordering::Relaxed)
    }

    /// Read the current assignment-queries count.
    pub fn assignment_queries(&self) -> u64 {
        self.assignment_queries.load(Ordering::Relaxed)
    }

    /// Read the current selections-computed count.
    pub fn selections_computed(&self) -> u64 {
        self.selections_computed.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero (useful in tests).
    pub fn reset(&self) {
        self.tasks_submitted.store(0, Ordering::Relaxed);
        self.task_lists_served.store(0, Ordering::Relaxed);
        self.assignment_queries.store(0, Ordering::Relaxed);
        self.selections_computed.store(0, Ordering::Relaxed);
    }
}
