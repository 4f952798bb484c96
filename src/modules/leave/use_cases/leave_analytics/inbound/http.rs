use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle_monthly_usage(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    match state.engine.monthly_usage(&employee_id).await {
        Ok(usage) => Json(usage).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Usage of the manager's direct reports.
pub async fn handle_team_usage(
    State(state): State<AppState>,
    Path(manager_id): Path<String>,
) -> impl IntoResponse {
    match state.engine.team_usage(&manager_id).await {
        Ok(usage) => Json(usage).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_sick_weekdays(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    match state.engine.sick_weekday_distribution(&employee_id).await {
        Ok(distribution) => Json(distribution).into_response(),
        Err(err) => err.into_response(),
    }
}
