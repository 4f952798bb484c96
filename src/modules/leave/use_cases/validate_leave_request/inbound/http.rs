use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::leave::core::request::{LeaveCategory, LeaveRequest};
use crate::modules::leave::core::sick_pattern::AlertLevel;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ValidateLeaveRequestBody {
    pub employee_id: String,
    pub category: LeaveCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Serialize)]
pub struct ValidationResponse {
    pub admissible: bool,
    pub working_days: Option<u32>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub async fn handle_validate(
    State(state): State<AppState>,
    body: Result<Json<ValidateLeaveRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .engine
        .validate_request(
            &body.employee_id,
            body.category,
            body.start_date,
            body.end_date,
            Utc::now(),
        )
        .await
    {
        Ok(report) => Json(ValidationResponse {
            admissible: report.is_admissible(),
            working_days: report.working_days,
            errors: report.errors.iter().map(ToString::to_string).collect(),
            warnings: report.warnings.iter().map(ToString::to_string).collect(),
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}

#[derive(Deserialize)]
pub struct CoverageParams {
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Serialize)]
pub struct CoverageResponse {
    pub percent: i64,
    pub peer_count: usize,
    pub overlapping: Vec<LeaveRequest>,
}

pub async fn handle_coverage(
    State(state): State<AppState>,
    Query(params): Query<CoverageParams>,
) -> impl IntoResponse {
    match state
        .engine
        .coverage_for(&params.employee_id, params.start_date, params.end_date)
        .await
    {
        Ok(coverage) => Json(CoverageResponse {
            percent: coverage.percent(),
            peer_count: coverage.peer_count,
            overlapping: coverage.overlapping,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}

#[derive(Serialize)]
pub struct SickPatternResponse {
    pub total_days: u32,
    pub frequency: usize,
    pub pattern: &'static str,
    pub alert_level: AlertLevel,
}

pub async fn handle_sick_pattern(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    match state.engine.sick_pattern_for(&employee_id).await {
        Ok(pattern) => Json(SickPatternResponse {
            total_days: pattern.total_days,
            frequency: pattern.frequency,
            pattern: pattern.pattern.as_str(),
            alert_level: pattern.alert_level,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}
