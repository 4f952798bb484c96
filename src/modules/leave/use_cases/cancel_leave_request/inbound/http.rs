use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::leave::use_cases::cancel_leave_request::command::CancelLeaveRequest;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CancelLeaveRequestBody {
    pub employee_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
    body: Result<Json<CancelLeaveRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CancelLeaveRequest {
        request_id,
        requester_id: body.employee_id,
        cancelled_at: Utc::now(),
    };

    match state.engine.cancel_request(command).await {
        Ok(request) => Json(request).into_response(),
        Err(err) => err.into_response(),
    }
}
