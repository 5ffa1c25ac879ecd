use axum::extract::{Path, Query};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct GreetQuery {
    #[serde(default)]
    pub title: String,
}

/// Greets the named caller, prefixed with the optional `title` query
/// parameter. The composed "<title> <name>" is trimmed so an absent title
/// leaves no leading space.
#[tracing::instrument]
pub async fn greet(
    Path(name): Path<String>,
    Query(params): Query<GreetQuery>,
) -> impl IntoResponse {
    let full = format!("{} {}", params.title, name);

    (
        StatusCode::ACCEPTED,
        Json(json!({ "message": format!("Hello, {}!", full.trim()) })),
    )
}
