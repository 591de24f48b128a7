use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{AppState, Location, Plan};
use crate::pricing::{BillingCycle, PriceQuote};

use super::error::HandlerError;
use super::helpers::{load_sorted_plans, query_value};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub plan: String,
    #[serde(flatten)]
    pub quote: PriceQuote,
    pub purchase_url: String,
}

fn parse_location(q: &HashMap<String, String>) -> Result<Option<Location>, HandlerError> {
    query_value(q, "location")
        .map(|raw| raw.parse::<Location>().map_err(|e| HandlerError::BadRequest(e.to_string())))
        .transpose()
}

pub async fn plans_get(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Plan>>, HandlerError> {
    let location = parse_location(&q)?;
    Ok(Json(load_sorted_plans(&state, location).await?))
}

pub async fn quote_get(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> Result<Json<QuoteResponse>, HandlerError> {
    let name = query_value(&q, "plan")
        .ok_or_else(|| HandlerError::BadRequest("Missing plan".to_string()))?;
    let cycle: BillingCycle = query_value(&q, "cycle").unwrap_or("monthly").parse()?;
    let location = parse_location(&q)?;

    let plans = load_sorted_plans(&state, location).await?;
    let plan = plans
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| HandlerError::NotFound(format!("Unknown plan: {}", name)))?;

    let quote = state.quotes.quote(plan, cycle)?;
    Ok(Json(QuoteResponse {
        plan: plan.name.clone(),
        purchase_url: state.purchase_links.resolve_plan(plan, cycle),
        quote,
    }))
}
