//! HTTP gateway for the task service.
//!
//! The gateway is pure translation: each route parses the request, calls
//! the matching [`TaskService`] procedure through one long-lived shared
//! handle, and relays the outcome. Success bodies pass through verbatim;
//! typed errors become their wire code and matching HTTP status. No
//! business logic lives here.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use taskforge_core::TaskStore;
//! use taskforge_gateway::TaskGateway;
//! use taskforge_rpc::TaskService;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = TaskService::new(Arc::new(TaskStore::new()));
//!     let gateway = TaskGateway::new(Arc::new(service));
//!     gateway.serve("0.0.0.0:3000").await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use taskforge_core::{TaskId, TaskPatch};
use taskforge_rpc::{
    AddTaskRequest, DeleteTaskRequest, DeleteTaskResponse, ErrorResponse, GetTaskRequest,
    ListTasksResponse, RpcError, TaskResponse, TaskService, UpdateTaskRequest,
};

// Track service start time for uptime reporting
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

fn uptime_seconds() -> u64 {
    START_TIME.get_or_init(Instant::now).elapsed().as_secs()
}

/// Shared application state
#[derive(Clone)]
struct AppState {
    service: Arc<TaskService>,
}

/// HTTP gateway over a [`TaskService`].
///
/// Routes:
///
/// | Method | Path              | Procedure  |
/// |--------|-------------------|------------|
/// | GET    | /api/tasks        | ListTasks  |
/// | POST   | /api/tasks        | AddTask    |
/// | GET    | /api/tasks/{id}   | GetTask    |
/// | PUT    | /api/tasks/{id}   | UpdateTask |
/// | DELETE | /api/tasks/{id}   | DeleteTask |
/// | GET    | /health           | liveness   |
pub struct TaskGateway {
    service: Arc<TaskService>,
}

impl TaskGateway {
    /// Create a gateway over the given service handle.
    pub fn new(service: Arc<TaskService>) -> Self {
        Self { service }
    }

    /// Build the Axum router for this gateway.
    pub fn router(&self) -> Router {
        let state = AppState {
            service: Arc::clone(&self.service),
        };

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/tasks", get(list_tasks).post(add_task))
            .route(
                "/api/tasks/{task_id}",
                get(get_task).put(update_task).delete(delete_task),
            )
            .route("/health", get(health_check))
            .with_state(state)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Serve the gateway on the given address until a shutdown signal.
    pub async fn serve(self, addr: &str) -> Result<(), std::io::Error> {
        let listener = tokio::net::TcpListener::bind(addr).await.inspect_err(|e| {
            error!(address = %addr, error = %e, "Failed to bind task gateway");
        })?;

        info!(address = %addr, "Task gateway starting");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(crate::shutdown::shutdown_signal())
            .await
    }
}

// =============================================================================
// Route Handlers
// =============================================================================

/// GET /api/tasks - snapshot of all tasks
async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<ListTasksResponse>, GatewayError> {
    let response = state.service.list_tasks().await?;
    Ok(Json(response))
}

/// POST /api/tasks - create a task
async fn add_task(
    State(state): State<AppState>,
    payload: Result<Json<AddTaskRequest>, JsonRejection>,
) -> Result<Json<TaskResponse>, GatewayError> {
    let Json(request) = payload.map_err(invalid_body)?;

    debug!(title = %request.title, "Received add task request");

    let response = state.service.add_task(request).await?;
    Ok(Json(response))
}

/// GET /api/tasks/{task_id} - fetch one task
async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<TaskId>,
) -> Result<Json<TaskResponse>, GatewayError> {
    let response = state.service.get_task(GetTaskRequest { task_id }).await?;
    Ok(Json(response))
}

/// PUT /api/tasks/{task_id} - merge a patch over one task
async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<TaskId>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<TaskResponse>, GatewayError> {
    let Json(task) = payload.map_err(invalid_body)?;

    let response = state
        .service
        .update_task(UpdateTaskRequest { task_id, task })
        .await?;
    Ok(Json(response))
}

/// DELETE /api/tasks/{task_id} - delete one task
async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<TaskId>,
) -> Result<Json<DeleteTaskResponse>, GatewayError> {
    let response = state
        .service
        .delete_task(DeleteTaskRequest { task_id })
        .await?;
    Ok(Json(response))
}

/// GET /health - basic liveness endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "taskforge-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now(),
        "uptime_seconds": uptime_seconds(),
    }))
}

// =============================================================================
// Error Response
// =============================================================================

/// Map a malformed JSON body to the invalid-argument error class.
fn invalid_body(rejection: JsonRejection) -> GatewayError {
    GatewayError(RpcError::invalid_argument("body", rejection.body_text()))
}

/// Wrapper for procedure errors that implements `IntoResponse`
struct GatewayError(RpcError);

impl From<RpcError> for GatewayError {
    fn from(err: RpcError) -> Self {
        Self(err)
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        // Log the full error; the response body only carries the sanitized
        // wire form.
        debug!(error = %self.0, "Request failed");

        let error_response: ErrorResponse = self.0.into();
        let status = match error_response.code {
            400 => StatusCode::BAD_REQUEST,
            404 => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(error_response)).into_response()
    }
}
