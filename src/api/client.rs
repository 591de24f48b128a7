use reqwest::Method;
use serde_json::Value;
use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::ApiError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        eprintln!("{}", msg);
    }
}

fn curl_line(method: &Method, url: &str, api_token: &str) -> String {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
    if !api_token.is_empty() {
        // never echo the token itself
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'API-Token: ***'").fg(yansi::Color::Magenta)
        ));
    }
    parts.join(" ")
}

/// Core HTTP client function for the content API.
/// Sends the token header when configured and decodes the JSON body.
pub async fn api_call(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    method: Method,
    endpoint: &str,
    params: &[(&str, &str)],
) -> Result<Value, ApiError> {
    let url = format!("{}{}", api_base_url, endpoint);
    let mut url_for_log = url.clone();
    if !params.is_empty() {
        url_for_log = format!("{}?{}", url_for_log, crate::utils::build_query_string(params));
    }
    log_output(format!("Request:\n{}", curl_line(&method, &url_for_log, api_token)));
    tracing::debug!(%method, url = %url_for_log, "API request");

    let mut req = client.request(method, &url);
    if !api_token.is_empty() {
        req = req.header("API-Token", api_token);
    }
    if !params.is_empty() {
        req = req.query(params);
    }

    let resp = req.send().await?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), endpoint, "API returned an error status");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let result: Value = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    let json_str = serde_json::to_string(&result).unwrap_or_else(|_| format!("{:?}", result));
    log_output(format!("Response:\n{}", Paint::new(json_str).rgb(100, 100, 100)));
    Ok(result)
}
