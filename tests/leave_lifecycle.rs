// End-to-end scenarios through the public HTTP router on the seeded engine.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use leave_management::shell::{app_state, http::router};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    router(app_state(true).await.unwrap())
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn submit_then_approve_charges_the_balance_once() {
    let app = app().await;
    let (status, submitted) = call(
        &app,
        "POST",
        "/leave-requests",
        Some(json!({
            "employee_id": "E003",
            "category": "annual",
            "start_date": "2030-06-03",
            "end_date": "2030-06-07",
            "reason": "Summer"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = submitted["request"]["id"].as_str().unwrap().to_string();
    assert_eq!(submitted["request"]["days"], 5);

    let (_, queue) = call(&app, "GET", "/employees/M001/pending-approvals", None).await;
    assert!(queue.as_array().unwrap().iter().any(|p| p["request"]["id"] == id.as_str()));

    let approve = json!({ "approver_id": "M001", "comment": "Enjoy" });
    let (status, approved) = call(&app, "POST", &format!("/leave-requests/{id}/approve"), Some(approve.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");
    assert_eq!(approved["comment"], "Enjoy");

    let (status, _) = call(&app, "POST", &format!("/leave-requests/{id}/approve"), Some(approve)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, balances) = call(&app, "GET", "/employees/E003/balances", None).await;
    assert_eq!(balances["annual"], json!({ "remaining": 15, "used": 5 }));
}

#[tokio::test]
async fn half_the_department_away_is_not_low_coverage() {
    let app = app().await;
    // E001 has L001 approved for Feb 1 to Feb 5 2024.
    let (status, report) = call(
        &app,
        "POST",
        "/leave-requests/validate",
        Some(json!({
            "employee_id": "E003",
            "category": "annual",
            "start_date": "2024-02-05",
            "end_date": "2024-02-05"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["admissible"], true);
    assert_eq!(report["working_days"], 1);
    let warnings = report["warnings"].as_array().unwrap();
    assert!(warnings.iter().any(|w| w == "Less than 7 days notice provided"));
    assert!(!warnings.iter().any(|w| w.as_str().unwrap().starts_with("Low team coverage")));
}

#[tokio::test]
async fn rejected_and_cancelled_requests_stay_listed() {
    let app = app().await;
    let (status, _) = call(
        &app,
        "POST",
        "/leave-requests/L003/reject",
        Some(json!({ "approver_id": "M001" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(
        &app,
        "POST",
        "/leave-requests/L004/cancel",
        Some(json!({ "employee_id": "E001" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, rejected) = call(&app, "GET", "/leave-requests?status=rejected", None).await;
    assert_eq!(rejected[0]["id"], "L003");
    assert_eq!(rejected[0]["comment"], "Request rejected");
    let (_, cancelled) = call(&app, "GET", "/leave-requests?status=cancelled", None).await;
    assert_eq!(cancelled[0]["id"], "L004");
    let (_, pending) = call(&app, "GET", "/employees/M001/pending-approvals", None).await;
    assert_eq!(pending, json!([]));
}

#[tokio::test]
async fn a_new_holiday_shortens_later_requests() {
    let app = app().await;
    let (status, _) = call(
        &app,
        "POST",
        "/holidays",
        Some(json!({ "date": "2030-06-05", "name": "Company Day" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, report) = call(
        &app,
        "POST",
        "/leave-requests/validate",
        Some(json!({
            "employee_id": "E005",
            "category": "annual",
            "start_date": "2030-06-03",
            "end_date": "2030-06-07"
        })),
    )
    .await;
    assert_eq!(report["working_days"], 4);

    let (_, calendar) = call(&app, "GET", "/team-calendar?viewer_id=M002&year=2030&month=6", None).await;
    assert_eq!(calendar["holidays"][0]["name"], "Company Day");
    assert_eq!(calendar["members"].as_array().unwrap().len(), 2);
}
