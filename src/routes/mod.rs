//! Router assembly and page handlers

pub mod blog;
pub mod health;
pub mod home;
pub mod layout;
pub mod services;

use axum::{routing::get, Router};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::error::AppError;
use crate::AppState;

/// Full site
pub fn app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(home::index))
        .route("/services/:id", get(services::detail))
        .route("/blog", get(blog::list))
        .route("/blog/:id", get(blog::detail))
        .merge(crate::pricing::router())
        .merge(crate::quote::router())
        .merge(health::router())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}

/// Router served when the content could not be loaded at startup: every
/// page answers with the generic error banner.
pub fn unavailable_app(cause: String, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health::unavailable))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(move || {
            let cause = cause.clone();
            async move { AppError::Unavailable(cause) }
        })
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> AppError {
    AppError::NotFound
}
