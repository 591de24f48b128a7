use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use std::collections::HashMap;

use crate::models::{AppState, Location};
use crate::pricing::{BillingCycle, NO_LINK};
use crate::services::{build_plan_cards, cycle_options, location_options};
use crate::templates::PricingPageTemplate;
use crate::utils::parse_flag;

use super::helpers::{build_page_globals, load_sorted_plans, query_value, render_template, PageGlobals};

pub async fn root_get() -> Redirect {
    Redirect::to("/pricing")
}

pub async fn pricing_get(State(state): State<AppState>, Query(q): Query<HashMap<String, String>>) -> Response {
    let mut notices = Vec::new();

    let raw_location = query_value(&q, "location").unwrap_or("USA");
    let location = match raw_location.parse::<Location>() {
        Ok(l) => Some(l),
        Err(e) => {
            tracing::info!(%e, "Pricing page requested for unknown location");
            notices.push(format!("We do not offer servers in \"{}\".", raw_location));
            None
        }
    };

    let raw_cycle = query_value(&q, "cycle").unwrap_or("monthly");
    let cycle = match raw_cycle.parse::<BillingCycle>() {
        Ok(c) => Some(c),
        Err(e) => {
            tracing::warn!(%e, "Pricing page requested with unknown billing cycle");
            notices.push(format!("Unknown billing cycle \"{}\"; prices are unavailable.", raw_cycle));
            None
        }
    };

    let mut cards = Vec::new();
    if let Some(loc) = location {
        match load_sorted_plans(&state, Some(loc)).await {
            Ok(plans) => cards = build_plan_cards(&plans, cycle, &state.quotes, &state.purchase_links),
            Err(e) => {
                tracing::error!(%e, location = %loc, "Failed to load plans");
                notices.push("Plans could not be loaded right now. Please try again shortly.".to_string());
            }
        }
    }

    let locations = location_options(location, cycle.map(|c| c.as_str()).unwrap_or(raw_cycle));
    let cycles = cycle_options(location.unwrap_or(Location::Usa), cycle);
    let PageGlobals { home_url, stylesheet_url } = build_page_globals(&state);
    let has_notices = !notices.is_empty();
    let has_cards = !cards.is_empty();

    render_template(PricingPageTemplate {
        home_url,
        stylesheet_url,
        notices,
        has_notices,
        location_label: location.map(|l| l.to_string()).unwrap_or_else(|| raw_location.to_string()),
        locations: &locations,
        cycles: &cycles,
        cards: &cards,
        has_cards,
    })
}

/// Redirect to the checkout for `plan` billed every `cycle`.
pub async fn buy_get(State(state): State<AppState>, Query(q): Query<HashMap<String, String>>) -> Response {
    let plan = query_value(&q, "plan").unwrap_or_default();
    let cycle = match query_value(&q, "cycle").unwrap_or("monthly").parse::<BillingCycle>() {
        Ok(c) => c,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };
    let is_custom = parse_flag(q.get("custom").map(String::as_str), false);

    let url = state.purchase_links.resolve(plan, cycle, is_custom);
    if url == NO_LINK {
        tracing::info!(plan, %cycle, "No purchase link for plan; sending back to pricing");
        return Redirect::to("/pricing").into_response();
    }
    tracing::info!(plan, %cycle, %url, "Redirecting to checkout");
    Redirect::to(&url).into_response()
}
