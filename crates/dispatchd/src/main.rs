//! HTTP daemon for the technician dispatch service.
//!
//! Serves task submission, task listing, per-technician assignment
//! history, and best-technician selection over three JSON store files
//! under a common data directory.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, Level};

use dispatch_core::{
    init_tracing, AssignmentLedger, PredictionStore, TaskRepository, METRICS, VERSION,
};
use dispatch_store::JsonFileStore;
use dispatchd::{router, AppState};

#[derive(Parser)]
#[command(name = "dispatchd")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Technician dispatch HTTP service", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "DISPATCH_BIND", default_value = "0.0.0.0:2112")]
    bind: String,

    /// Directory holding the JSON store files
    #[arg(long, env = "DISPATCH_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// Submitted-task store file, relative to the data directory
    #[arg(long, default_value = "tasks.json")]
    task_store: String,

    /// Historical-assignment store file, relative to the data directory.
    /// Written by the completed-work pipeline.
    #[arg(long, default_value = "automl_training_data.json")]
    assignment_store: String,

    /// Prediction-batch store file, relative to the data directory.
    /// Written by the external scoring pipeline.
    #[arg(long, default_value = "ml_prediction.json")]
    prediction_store: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(args.json, level);

    let tasks = JsonFileStore::new(args.data_dir.join(&args.task_store))
        .context("failed to open task store")?;
    let assignments = JsonFileStore::new(args.data_dir.join(&args.assignment_store))
        .context("failed to open assignment store")?;
    let predictions = JsonFileStore::new(args.data_dir.join(&args.prediction_store))
        .context("failed to open prediction store")?;
    info!(
        event = "stores.opened",
        tasks = %tasks.path().display(),
        assignments = %assignments.path().display(),
        predictions = %predictions.path().display()
    );

    let state = AppState {
        tasks: Arc::new(TaskRepository::new(Arc::new(tasks))),
        assignments: Arc::new(AssignmentLedger::new(Arc::new(assignments))),
        predictions: Arc::new(PredictionStore::new(Arc::new(predictions))),
    };

    let listener = TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!(
        event = "daemon.started",
        version = VERSION,
        bind = %args.bind,
        data_dir = %args.data_dir.display()
    );

    let result = axum::serve(listener, router(state)).await;
    METRICS.flush();
    result.context("server terminated")
}
