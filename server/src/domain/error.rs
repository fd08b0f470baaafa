//! Domain Layer - Errors
//!
//! Failures shared by the store and the HTTP layer.

use thiserror::Error;

use super::employee::EmpId;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Unable to find employee with empId {0}")]
    EmployeeNotFound(EmpId),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The store accepted the request but reported that nothing was written.
    #[error("Write not applied: {0}")]
    WriteFailed(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
