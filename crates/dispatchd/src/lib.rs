//! HTTP surface for the technician dispatch service.
//!
//! Routes are fixed by the clients that already call them:
//!
//! - `POST /addnewtask`: record a submitted task
//! - `GET  /viewallnewtasks`: all submitted tasks in submission order
//! - `GET  /viewassignmentbytech?technicianid=`: assignment history
//! - `GET  /assigntasktotech`: best technician per open task signature
//! - `GET  /metrics`: plain-text counters
//!
//! Handlers stay thin: parse, call into `dispatch-core`, map the error
//! taxonomy onto a status code.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use dispatch_core::{
    select_best, AssignedTask, Assignment, AssignmentLedger, DispatchError, PredictionStore, Task,
    TaskRepository, METRICS,
};

/// Shared handler state: one service per backing store.
#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<TaskRepository>,
    pub assignments: Arc<AssignmentLedger>,
    pub predictions: Arc<PredictionStore>,
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/addnewtask", post(create_task))
        .route("/viewallnewtasks", get(list_tasks))
        .route("/viewassignmentbytech", get(assignments_by_technician))
        .route("/assigntasktotech", get(assign_tasks))
        .route("/metrics", get(metrics))
        .with_state(state)
}

/// Dispatch error carried out of a handler, mapped onto an HTTP status.
pub struct ApiError(DispatchError);

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DispatchError::InvalidInput(_) | DispatchError::InvalidArgument(_) => {
                StatusCode::BAD_REQUEST
            }
            DispatchError::NotFound { .. } => StatusCode::NOT_FOUND,
            DispatchError::CorruptStore { .. } | DispatchError::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.0.to_string()).into_response()
    }
}

async fn home() -> &'static str {
    "Welcome to the technician dispatch service"
}

async fn create_task(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    if body.is_empty() {
        return Err(DispatchError::InvalidInput("request body required".to_string()).into());
    }
    let task: Task = serde_json::from_slice(&body)
        .map_err(|err| DispatchError::InvalidInput(format!("malformed task payload: {err}")))?;

    state.tasks.add(task).await?;
    METRICS.inc_tasks_submitted();

    Ok((StatusCode::CREATED, "Added New Task"))
}

async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.tasks.list().await?;
    METRICS.inc_task_lists_served();
    Ok(Json(tasks))
}

#[derive(Deserialize)]
struct TechnicianQuery {
    #[serde(default)]
    technicianid: String,
}

async fn assignments_by_technician(
    State(state): State<AppState>,
    Query(query): Query<TechnicianQuery>,
) -> Result<Json<Vec<AssignedTask>>, ApiError> {
    let records = state
        .assignments
        .assignments_for(&query.technicianid)
        .await?;
    METRICS.inc_assignment_queries();

    info!(
        event = "assignments.queried",
        technician = %query.technicianid,
        matches = records.len()
    );
    Ok(Json(records))
}

async fn assign_tasks(State(state): State<AppState>) -> Result<Json<Vec<Assignment>>, ApiError> {
    let batch = state.predictions.latest().await?;
    let winners = select_best(&batch);
    METRICS.inc_selections_computed();

    // Deterministic response body: order winners by task signature.
    let mut entries: Vec<_> = winners.into_iter().collect();
    entries.sort_by_key(|(signature, _)| *signature);
    let assignments: Vec<Assignment> = entries
        .into_iter()
        .map(|(_, assignment)| assignment)
        .collect();

    info!(
        event = "selection.computed",
        candidates = batch.len(),
        winners = assignments.len()
    );
    Ok(Json(assignments))
}

async fn metrics() -> String {
    METRICS.render_text()
}
