use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::api::{load_plans, ApiError};
use crate::models::{AppState, Location, Plan};
use crate::services::sort_plans;
use crate::utils::absolute_url;

/// Links shared by every page layout
pub struct PageGlobals {
    pub home_url: String,
    pub stylesheet_url: String,
}

pub fn build_page_globals(state: &AppState) -> PageGlobals {
    PageGlobals {
        home_url: absolute_url(&state.public_base_url, "/pricing"),
        stylesheet_url: absolute_url(&state.public_base_url, "/static/styles.css"),
    }
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Plans for a location, cheapest first
pub async fn load_sorted_plans(state: &AppState, location: Option<Location>) -> Result<Vec<Plan>, ApiError> {
    let mut plans = load_plans(&state.client, &state.api_base_url, &state.api_token, location).await?;
    sort_plans(&mut plans);
    Ok(plans)
}

/// Query value, treating blank as absent
pub fn query_value<'a>(q: &'a std::collections::HashMap<String, String>, key: &str) -> Option<&'a str> {
    q.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}
