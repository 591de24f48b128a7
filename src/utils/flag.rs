/// Read a boolean query flag; empty or missing values take `default`
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_lowercase()) {
        Some(t) if !t.is_empty() => matches!(t.as_str(), "1" | "true" | "yes" | "on"),
        _ => default,
    }
}
