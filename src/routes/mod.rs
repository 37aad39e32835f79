mod about;
mod health;
mod practice;
mod words;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::response::json_error;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(about::index))
        .route("/health", get(health::health_check))
        .route("/api/word", get(words::random_word))
        .route("/api/validate-sentence", post(practice::validate_sentence))
        .route("/api/summary", get(practice::summary))
        .route("/api/history", get(practice::history))
        .fallback(fallback_handler)
        .with_state(state)
}

async fn fallback_handler() -> Response {
    json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "no such endpoint").into_response()
}
