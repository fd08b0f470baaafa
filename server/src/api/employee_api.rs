//! Employee lookup, used by sign-in

use axum::extract::{Path, State};
use axum::Json;

use crate::domain::{EmpId, Employee};
use crate::AppState;
use super::error::ApiError;

/// Parse the `{emp_id}` path segment. Runs before any store access.
pub(super) fn parse_emp_id(raw: &str) -> Result<EmpId, ApiError> {
    raw.parse::<EmpId>().map_err(|_| ApiError::InvalidId)
}

/// GET /api/employees/{emp_id}
pub async fn find_employee_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    let emp_id = parse_emp_id(&raw_id)?;
    let employee = state.store.get(emp_id).await?;
    Ok(Json(employee))
}
