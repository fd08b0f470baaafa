//! Task endpoints
//!
//! Checks run in a fixed order: employee id format, body schema, employee
//! existence, mutation, mutation result. The body is taken as a
//! `Result<Json<_>, JsonRejection>` so a bad id is reported before a bad body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, EmpId, Item, TaskLists};
use crate::AppState;
use super::employee_api::parse_emp_id;
use super::error::ApiError;

/// Body of POST /api/employees/{emp_id}/tasks
#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub text: String,
}

/// Response of a successful add: only the new id
#[derive(Debug, Serialize, Deserialize)]
pub struct NewTaskResponse {
    pub id: String,
}

/// Response of GET /api/employees/{emp_id}/tasks
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTasks {
    pub emp_id: EmpId,
    pub todo: Vec<Item>,
    pub done: Vec<Item>,
}

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))
}

/// GET /api/employees/{emp_id}/tasks
pub async fn get_tasks(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<EmployeeTasks>, ApiError> {
    let emp_id = parse_emp_id(&raw_id)?;
    let employee = state.store.get(emp_id).await?;
    Ok(Json(EmployeeTasks {
        emp_id: employee.emp_id,
        todo: employee.todo,
        done: employee.done,
    }))
}

/// POST /api/employees/{emp_id}/tasks
pub async fn add_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<AddTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NewTaskResponse>), ApiError> {
    let emp_id = parse_emp_id(&raw_id)?;
    let request = parse_body(body)?;
    if request.text.is_empty() {
        return Err(ApiError::InvalidBody("task text must not be empty".to_string()));
    }

    let item = state.store.append(emp_id, &request.text).await?;
    log::info!("Task {} added for empId {}", item.id, emp_id);
    Ok((StatusCode::CREATED, Json(NewTaskResponse { id: item.id })))
}

/// PUT /api/employees/{emp_id}/tasks
///
/// Overwrites both lists with the client's snapshot (last writer wins).
pub async fn update_tasks(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<TaskLists>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let emp_id = parse_emp_id(&raw_id)?;
    let lists = parse_body(body)?;

    state.store.replace_lists(emp_id, &lists).await?;
    log::info!(
        "Task lists replaced for empId {} ({} todo, {} done)",
        emp_id,
        lists.todo.len(),
        lists.done.len()
    );
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/employees/{emp_id}/tasks/{task_id}
///
/// Idempotent: an absent task, or an absent employee, is still a success.
pub async fn delete_task(
    State(state): State<AppState>,
    Path((raw_id, task_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let emp_id = parse_emp_id(&raw_id)?;

    match state.store.remove(emp_id, &task_id).await {
        Ok(()) => {
            log::info!("Task {} deleted for empId {}", task_id, emp_id);
            Ok(StatusCode::NO_CONTENT)
        }
        Err(DomainError::EmployeeNotFound(_)) => {
            log::debug!("Delete for unknown empId {}, nothing to do", emp_id);
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => Err(e.into()),
    }
}
