use crate::shell::seed;
use crate::shell::state::AppState;
use crate::tests::fixtures::engine::{TestStore, engine_with};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub async fn demo_state() -> AppState {
    AppState {
        engine: Arc::new(seed::demo_engine().await.unwrap()),
    }
}

pub fn offline_state() -> AppState {
    let mut store = TestStore::new();
    store.toggle_offline();
    AppState {
        engine: Arc::new(engine_with(store)),
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

/// Sends one request and decodes the JSON body, `Null` when empty,
/// `String` when the body is not JSON (e.g. axum extractor rejections).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}
