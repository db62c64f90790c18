use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{api::ErrorResponse, completion::CompletionError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image provided")]
    NoImage,

    /// Body could not be read as a conversion request
    #[error("{0}")]
    InvalidBody(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoImage | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::InvalidBody(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Completion(err) => tracing::error!("completion failed: {err}"),
            ApiError::NoImage | ApiError::InvalidBody(_) | ApiError::PayloadTooLarge(_) => {
                tracing::info!("rejected conversion request: {self}")
            }
        }

        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
