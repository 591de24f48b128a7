use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::handlers::system::{stylesheet_response, DEFAULT_STYLESHEET};
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::pricing::root_get))
        .route("/pricing", get(handlers::pricing::pricing_get))
        .route("/buy", get(handlers::pricing::buy_get))
        .route("/api/plans", get(handlers::quotes::plans_get))
        .route("/api/quote", get(handlers::quotes::quote_get))
        .route("/health", get(handlers::system::health_get))
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet.clone();
                async move { stylesheet_response(css) }
            }),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
