//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Banner shown when the site content could not be loaded.
pub const UNAVAILABLE_MESSAGE: &str = "Помилка завантаження даних";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,

    #[error("Content unavailable: {0}")]
    Unavailable(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Сторінку не знайдено"),
            AppError::Unavailable(cause) => {
                tracing::error!("Serving unavailable banner: {}", cause);
                (StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_MESSAGE)
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Внутрішня помилка")
            }
        };

        // Plain HTML so errors render even when templates are broken
        let html = format!(
            r#"<!DOCTYPE html>
<html lang="uk">
<head><meta charset="utf-8"><title>{} - Електрик 220В</title></head>
<body style="font-family: sans-serif; text-align: center; padding: 50px;">
    <h1>{}</h1>
    <p role="alert">{}</p>
    <a href="/">Повернутися на головну</a>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            message
        );

        (status, axum::response::Html(html)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
