use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{error::ApiError, prompt, AppState};

use super::models::{ConvertRequest, ConvertResponse, ErrorResponse};

pub async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let Json(payload) = payload?;

    let image_base64 = match payload.image_base64.as_deref() {
        Some(image) if !image.is_empty() => image,
        _ => return Err(ApiError::NoImage),
    };

    tracing::debug!(payload_len = image_base64.len(), "converting image");

    let request = prompt::conversion_request(image_base64, &state.settings);
    let code = state.completion.complete(&request).await?;

    Ok(Json(ConvertResponse { code }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
