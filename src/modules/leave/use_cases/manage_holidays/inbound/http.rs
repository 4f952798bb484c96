use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;

use crate::modules::leave::core::calendar::Holiday;
use crate::shell::state::AppState;

pub async fn handle_list(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.engine.holidays().await)
}

pub async fn handle_add(
    State(state): State<AppState>,
    body: Result<Json<Holiday>, JsonRejection>,
) -> impl IntoResponse {
    let Json(holiday) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.engine.add_holiday(holiday.clone()).await {
        None => (StatusCode::CREATED, Json(holiday)).into_response(),
        Some(_) => (StatusCode::OK, Json(holiday)).into_response(),
    }
}

pub async fn handle_remove(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> impl IntoResponse {
    match state.engine.remove_holiday(date).await {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}
