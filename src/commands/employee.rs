//! Employee Commands

use crate::models::Employee;
use super::{client, read_json, url, ClientError};

/// GET /api/employees/{empId}
pub async fn find_employee_by_id(emp_id: i64) -> Result<Employee, ClientError> {
    let resp = client()
        .get(url(&format!("/api/employees/{}", emp_id)))
        .send()
        .await?;
    read_json(resp).await
}
