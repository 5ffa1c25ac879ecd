use axum::extract::Path;
use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Greets the caller named by the path segment.
pub async fn hello(Path(name): Path<String>) -> impl IntoResponse {
    Json(json!({ "message": format!("Hello, {}!", name) }))
}
