// Errors produced by the pure decide functions of the request lifecycle.

use crate::modules::leave::core::request::LeaveStatus;
use crate::modules::leave::core::validation::ValidationError;
use crate::shared::core::primitives::{EmployeeId, RequestId};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("leave request {0} already exists")]
    AlreadyExists(RequestId),

    #[error("leave request {0} not found")]
    NotFound(RequestId),

    #[error("leave request is {status}, only pending requests can change")]
    NotPending { status: LeaveStatus },

    #[error("{actor} is not allowed to act on a request from {requester}")]
    Unauthorized {
        actor: EmployeeId,
        requester: EmployeeId,
    },

    #[error("{}", join_messages(.0))]
    Validation(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
