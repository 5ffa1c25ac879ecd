use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct AddParams {
    pub a: i64,
    pub b: i64,
}

/// Adds the two integer query parameters.
///
/// Validation lives in the typed extractor: a missing or non-integer `a`/`b`
/// is rejected as 422 before the handler body runs. Sums outside the i64
/// range are rejected the same way rather than wrapping.
pub async fn add(params: Result<Query<AddParams>, QueryRejection>) -> Result<impl IntoResponse, AppError> {
    let Query(AddParams { a, b }) =
        params.map_err(|e| AppError::ValidationError(e.body_text()))?;

    let result = a
        .checked_add(b)
        .ok_or_else(|| AppError::ValidationError(format!("{} + {} overflows i64", a, b)))?;

    Ok(Json(json!({ "result": result })))
}
