/// Lower-case a display name and join its ASCII alphanumeric runs with `-`.
/// Anything else separates runs, so the result is always URL-safe.
///
/// ```
/// use hostfront::utils::slugify;
///
/// assert_eq!(slugify("Unknown Plan EU"), "unknown-plan-eu");
/// assert_eq!(slugify("  Gold / USA  "), "gold-usa");
/// ```
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("Silver USA"), "silver-usa");
        assert_eq!(slugify("Titanium  USA (NVMe)"), "titanium-usa-nvme");
        assert_eq!(slugify("--EU--"), "eu");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Café EU"), "caf-eu");
        assert_eq!(slugify("Ünïcode Plan USA"), "n-code-plan-usa");
        assert!(slugify("Zürich 東京 EU").is_ascii());
    }
}
