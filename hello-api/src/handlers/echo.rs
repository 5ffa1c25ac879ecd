use axum::extract::rejection::JsonRejection;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct EchoRequest {
    pub message: serde_json::Value,
}

/// Echoes the `message` field of the JSON body back under `you_sent`.
///
/// A missing body, unparsable JSON, and an absent `message` key all collapse
/// into the same fixed 400 response; the extractor rejection carries the
/// distinction but the contract does not.
pub async fn echo(
    body: Result<Json<EchoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) =
        body.map_err(|_| AppError::BadRequest(anyhow::anyhow!("`message` is required")))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "you_sent": request.message })),
    ))
}
