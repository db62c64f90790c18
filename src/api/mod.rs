mod handlers;
mod models;

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

pub use handlers::{convert, not_found};
pub use models::{ConvertRequest, ConvertResponse, ErrorResponse};

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/convert",
            post(convert).layer(DefaultBodyLimit::max(state.max_body_bytes)),
        )
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
