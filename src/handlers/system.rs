use axum::http::{header, HeaderValue};
use axum::response::IntoResponse;

pub async fn health_get() -> &'static str {
    "ok"
}

/// Embedded stylesheet, used unless a custom one was loaded at startup
pub const DEFAULT_STYLESHEET: &str = include_str!("../../static/styles.css");

pub fn stylesheet_response(css: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/css")),
            (header::CACHE_CONTROL, HeaderValue::from_static("public, max-age=86400")),
        ],
        css,
    )
}
