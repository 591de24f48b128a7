use urlencoding::encode;

/// Host part of a URL, without scheme or path
pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    let s = s.split_once("://").map(|(_, rest)| rest).unwrap_or(s);
    s.split(['/', '?']).next().unwrap_or_default().to_string()
}

/// Join a site-relative path onto the public base URL.
/// Absolute URLs pass through untouched.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return if base.is_empty() { "/".to_string() } else { base.to_string() };
    }
    format!("{}/{}", base, trimmed)
}

/// Encode key-value pairs as a query string
pub fn build_query_string(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
