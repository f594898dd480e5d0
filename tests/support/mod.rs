use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use catalog_api::{build_router, state::AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub fn app() -> Router {
    build_router(AppState::in_memory())
}

/// Build a request; `roles` is the comma-separated `x-api-roles` header
/// value, `None` for an anonymous caller.
pub fn json_request(
    method: &str,
    uri: &str,
    roles: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(roles) = roles {
        builder = builder.header("x-api-roles", roles);
    }

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request must be well formed")
}

pub async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request must complete");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must be readable")
        .to_bytes();

    let payload = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body must be JSON")
    };

    (status, payload)
}

pub fn assert_error(payload: &Value, kind: &str, message: &str) {
    assert_eq!(payload.get("type").and_then(Value::as_str), Some(kind));
    assert_eq!(payload.get("message").and_then(Value::as_str), Some(message));
}
