use crate::startup::AppState;
use axum::extract::State;
use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Welcome banner interpolating the application name resolved at startup.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": format!("Welcome to {}!", state.config.app_name)
    }))
}
