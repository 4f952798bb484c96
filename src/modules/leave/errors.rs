use crate::modules::leave::core::balance::LedgerError;
use crate::modules::leave::core::decision::DecideError;
use crate::shared::core::primitives::EmployeeId;
use crate::shared::infrastructure::event_store::EventStoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error("unknown employee: {0}")]
    UnknownEmployee(EmployeeId),

    #[error("employee {employee_id} is assigned unknown leave policy {policy}")]
    UnknownPolicy {
        employee_id: EmployeeId,
        policy: String,
    },

    #[error("invalid calendar month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Domain(DecideError::NotFound(_))
            | ApplicationError::UnknownEmployee(_) => StatusCode::NOT_FOUND,
            ApplicationError::Domain(DecideError::Unauthorized { .. }) => StatusCode::FORBIDDEN,
            ApplicationError::Domain(DecideError::AlreadyExists(_))
            | ApplicationError::Domain(DecideError::NotPending { .. })
            | ApplicationError::EventStore(EventStoreError::VersionMismatch { .. })
            | ApplicationError::Ledger(_) => StatusCode::CONFLICT,
            ApplicationError::Domain(DecideError::Validation(_))
            | ApplicationError::InvalidMonth { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationError::EventStore(EventStoreError::Backend(_))
            | ApplicationError::UnknownPolicy { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = match status {
            StatusCode::INTERNAL_SERVER_ERROR => "internal error".to_string(),
            _ => self.to_string(),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
