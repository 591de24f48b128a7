use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::ApiError;
use crate::pricing::PricingError;

/// Errors surfaced by the JSON endpoints
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Upstream(#[from] ApiError),
}

impl HandlerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Pricing(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        // upstream details stay in the log
        let message = match &self {
            Self::Upstream(e) => {
                tracing::error!(%e, "Content API request failed");
                "Plans are temporarily unavailable".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
