use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::leave::use_cases::reject_leave_request::command::RejectLeaveRequest;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RejectLeaveRequestBody {
    pub approver_id: String,
    pub comment: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
    body: Result<Json<RejectLeaveRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RejectLeaveRequest {
        request_id,
        approver_id: body.approver_id,
        comment: body.comment,
        decided_at: Utc::now(),
    };

    match state.engine.reject_request(command).await {
        Ok(request) => Json(request).into_response(),
        Err(err) => err.into_response(),
    }
}
