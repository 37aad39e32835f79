use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct AboutResponse {
    message: &'static str,
    version: &'static str,
    uptime: u64,
    endpoints: EndpointMap,
}

#[derive(Serialize)]
struct EndpointMap {
    word: &'static str,
    validate: &'static str,
    summary: &'static str,
    history: &'static str,
    health: &'static str,
}

pub async fn index(State(state): State<AppState>) -> Json<AboutResponse> {
    Json(AboutResponse {
        message: "Vocabulary Practice API",
        version: env!("CARGO_PKG_VERSION"),
        uptime: state.uptime_seconds(),
        endpoints: EndpointMap {
            word: "/api/word",
            validate: "/api/validate-sentence",
            summary: "/api/summary",
            history: "/api/history",
            health: "/health",
        },
    })
}
