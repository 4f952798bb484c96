use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::leave::use_cases::team_calendar::handler::{
    DailyAvailability, TeamCalendar, TeamScope,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TeamCalendarParams {
    pub viewer_id: String,
    #[serde(default)]
    pub scope: TeamScope,
    pub year: i32,
    pub month: u32,
}

#[derive(Serialize)]
pub struct TeamCalendarResponse {
    #[serde(flatten)]
    pub calendar: TeamCalendar,
    pub daily: Vec<DailyAvailability>,
    pub average_availability_percent: f64,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<TeamCalendarParams>,
) -> impl IntoResponse {
    match state
        .engine
        .team_calendar(&params.viewer_id, params.scope, params.year, params.month)
        .await
    {
        Ok(calendar) => Json(TeamCalendarResponse {
            daily: calendar.daily(),
            average_availability_percent: calendar.average_availability_percent(),
            calendar,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}
