use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::modules::leave::core::request::LeaveCategory;
use crate::modules::leave::use_cases::submit_leave_request::command::SubmitLeaveRequest;
use crate::shared::core::primitives::new_request_id;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitLeaveRequestBody {
    pub employee_id: String,
    pub category: LeaveCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitLeaveRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SubmitLeaveRequest {
        request_id: new_request_id(),
        employee_id: body.employee_id,
        category: body.category,
        start_date: body.start_date,
        end_date: body.end_date,
        reason: body.reason,
        submitted_at: Utc::now(),
    };

    match state.engine.submit_request(command).await {
        Ok(submission) => (StatusCode::CREATED, Json(submission)).into_response(),
        Err(err) => err.into_response(),
    }
}
