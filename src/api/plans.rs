use std::path::Path;

use reqwest::Method;
use serde_json::Value;

use crate::models::{Location, Plan};
use super::client::api_call;
use super::error::ApiError;

/// Load plans from the content API, optionally for one location.
///
/// Records that do not match the plan shape are skipped with a warning so
/// one bad document does not take the pricing page down.
pub async fn load_plans(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    location: Option<Location>,
) -> Result<Vec<Plan>, ApiError> {
    let mut params = Vec::new();
    if let Some(loc) = location {
        params.push(("location", loc.as_str()));
    }
    let payload = api_call(client, api_base_url, api_token, Method::GET, "/plans", &params).await?;
    let mut plans = parse_plans(&payload)?;
    if let Some(loc) = location {
        plans.retain(|p| p.location == loc);
    }
    tracing::info!(count = plans.len(), ?location, "Loaded plans");
    Ok(plans)
}

/// Read a JSON plan array from disk, in the same shape the API serves.
pub async fn load_plans_from_file(path: &Path, location: Option<Location>) -> Result<Vec<Plan>, ApiError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|source| ApiError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let payload: Value = serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string()))?;
    let mut plans = parse_plans(&payload)?;
    if let Some(loc) = location {
        plans.retain(|p| p.location == loc);
    }
    Ok(plans)
}

/// Accepts a bare array or an envelope with the array under `data`.
pub fn parse_plans(payload: &Value) -> Result<Vec<Plan>, ApiError> {
    let items = payload
        .as_array()
        .or_else(|| payload.get("data").and_then(|d| d.as_array()))
        .ok_or_else(|| ApiError::Decode("expected an array of plans".to_string()))?;

    let mut plans = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<Plan>(item.clone()) {
            Ok(plan) => plans.push(plan),
            Err(e) => {
                let name = item.get("name").and_then(|v| v.as_str()).unwrap_or("<unnamed>");
                tracing::warn!(%e, plan = name, "Skipping malformed plan record");
            }
        }
    }
    Ok(plans)
}
