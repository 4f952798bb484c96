use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::leave::use_cases::approve_leave_request::inbound::http as approve_http;
use crate::modules::leave::use_cases::leave_analytics::inbound::http as analytics_http;
use crate::modules::leave::use_cases::cancel_leave_request::inbound::http as cancel_http;
use crate::modules::leave::use_cases::list_leave_requests::inbound::http as list_http;
use crate::modules::leave::use_cases::manage_holidays::inbound::http as holidays_http;
use crate::modules::leave::use_cases::reject_leave_request::inbound::http as reject_http;
use crate::modules::leave::use_cases::submit_leave_request::inbound::http as submit_http;
use crate::modules::leave::use_cases::team_calendar::inbound::http as calendar_http;
use crate::modules::leave::use_cases::validate_leave_request::inbound::http as validate_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/leave-requests",
            post(submit_http::handle).get(list_http::handle_list),
        )
        .route(
            "/leave-requests/validate",
            post(validate_http::handle_validate),
        )
        .route("/leave-requests/{id}/approve", post(approve_http::handle))
        .route("/leave-requests/{id}/reject", post(reject_http::handle))
        .route("/leave-requests/{id}/cancel", post(cancel_http::handle))
        .route("/employees/{id}/balances", get(list_http::handle_balances))
        .route(
            "/employees/{id}/pending-approvals",
            get(list_http::handle_pending_approvals),
        )
        .route(
            "/employees/{id}/sick-pattern",
            get(validate_http::handle_sick_pattern),
        )
        .route("/employees/{id}/usage", get(analytics_http::handle_monthly_usage))
        .route(
            "/employees/{id}/team-usage",
            get(analytics_http::handle_team_usage),
        )
        .route(
            "/employees/{id}/sick-weekdays",
            get(analytics_http::handle_sick_weekdays),
        )
        .route("/coverage", get(validate_http::handle_coverage))
        .route("/team-calendar", get(calendar_http::handle))
        .route(
            "/holidays",
            get(holidays_http::handle_list).post(holidays_http::handle_add),
        )
        .route("/holidays/{date}", delete(holidays_http::handle_remove))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
