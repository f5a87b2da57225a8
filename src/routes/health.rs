//! Liveness endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "content_loaded": true,
        "services": state.content.services.len(),
        "articles": state.content.articles.len(),
    }))
}

pub async fn unavailable() -> (StatusCode, Json<Value>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": "unavailable",
            "version": env!("CARGO_PKG_VERSION"),
            "content_loaded": false,
        })),
    )
}
