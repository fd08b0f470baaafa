//! API Layer
//!
//! axum handlers that bridge HTTP requests to the task store.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /api/employees/{emp_id} | `find_employee_by_id` |
//! | GET | /api/employees/{emp_id}/tasks | `get_tasks` |
//! | POST | /api/employees/{emp_id}/tasks | `add_task` |
//! | PUT | /api/employees/{emp_id}/tasks | `update_tasks` |
//! | DELETE | /api/employees/{emp_id}/tasks/{task_id} | `delete_task` |
//! | GET | /health | `health_check` |

mod employee_api;
mod error;
mod task_api;

use std::path::Path;

use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use employee_api::find_employee_by_id;
pub use error::{ApiError, ErrorBody};
pub use task_api::{add_task, delete_task, get_tasks, update_tasks, AddTaskRequest, EmployeeTasks, NewTaskResponse};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router.
///
/// When `static_dir` is given, unmatched paths are served from it, falling
/// back to its `index.html` so the single-page front-end can be hosted here.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/api/employees/{emp_id}", get(find_employee_by_id))
        .route(
            "/api/employees/{emp_id}/tasks",
            get(get_tasks).post(add_task).put(update_tasks),
        )
        .route("/api/employees/{emp_id}/tasks/{task_id}", delete(delete_task))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => router,
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
