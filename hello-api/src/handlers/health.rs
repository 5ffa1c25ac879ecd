use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Fixed-body liveness endpoint kept for demo clients.
pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "hello-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
