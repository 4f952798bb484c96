use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::leave::core::request::LeaveStatus;
use crate::modules::leave::use_cases::list_leave_requests::handler::RequestFilter;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListLeaveRequestsParams {
    pub employee_id: Option<String>,
    pub status: Option<LeaveStatus>,
}

pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListLeaveRequestsParams>,
) -> impl IntoResponse {
    let filter = RequestFilter {
        employee_id: params.employee_id,
        statuses: params.status.into_iter().collect(),
    };
    match state.engine.list_requests(&filter).await {
        Ok(requests) => Json(requests).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_pending_approvals(
    State(state): State<AppState>,
    Path(manager_id): Path<String>,
) -> impl IntoResponse {
    match state.engine.pending_approvals(&manager_id, Utc::now()).await {
        Ok(queue) => Json(queue).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_balances(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    match state.engine.balances(&employee_id).await {
        Ok(sheet) => Json(sheet).into_response(),
        Err(err) => err.into_response(),
    }
}
