//! Employee provisioning from a JSON seed file
//!
//! Employees are created outside the task API. For local runs and demos the
//! server can read a JSON array of employee records at startup and insert the
//! ones that do not exist yet.

use std::path::Path;

use crate::domain::{DomainError, DomainResult, Employee};
use super::employee_repo::EmployeeRepository;

/// Parse a seed file: a JSON array of employee records
pub fn load_seed_file(path: &Path) -> DomainResult<Vec<Employee>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        DomainError::InvalidInput(format!("cannot read seed file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        DomainError::InvalidInput(format!("invalid seed file {}: {}", path.display(), e))
    })
}

/// Insert every employee that is not already stored. Returns how many were added.
pub async fn seed_employees(repo: &EmployeeRepository, employees: &[Employee]) -> DomainResult<usize> {
    let mut inserted = 0;
    for employee in employees {
        if repo.insert_if_absent(employee).await? {
            inserted += 1;
        } else {
            log::debug!("Employee {} already present, seed skipped", employee.emp_id);
        }
    }
    log::info!("Seeded {} of {} employee(s)", inserted, employees.len());
    Ok(inserted)
}
