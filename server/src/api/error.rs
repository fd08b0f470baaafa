//! API Error Mapping
//!
//! Every failure leaves the API as one `ApiError`: a kind, an HTTP status and
//! a human-readable message, serialized as `{kind, status, message}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::{DomainError, EmpId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Employee ID must be a number")]
    InvalidId,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Unable to find employee with empId {0}")]
    NotFound(EmpId),
    #[error("Unable to save tasks: {0}")]
    StoreWriteFailed(String),
    #[error("Task store unavailable: {0}")]
    StoreUnavailable(String),
}

/// JSON body of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidId => "InvalidId",
            ApiError::InvalidBody(_) => "InvalidBody",
            ApiError::NotFound(_) => "NotFound",
            ApiError::StoreWriteFailed(_) => "StoreWriteFailed",
            ApiError::StoreUnavailable(_) => "StoreUnavailable",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::StoreWriteFailed(_) | ApiError::StoreUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::EmployeeNotFound(emp_id) => ApiError::NotFound(emp_id),
            DomainError::InvalidInput(msg) => ApiError::InvalidBody(msg),
            DomainError::WriteFailed(msg) => ApiError::StoreWriteFailed(msg),
            DomainError::Unavailable(msg) => ApiError::StoreUnavailable(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}: {}", self.kind(), self);
        } else {
            log::warn!("{}: {}", self.kind(), self);
        }

        let body = ErrorBody {
            kind: self.kind(),
            status: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
