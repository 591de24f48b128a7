/// Format an amount in dollars with two decimals.
///
/// Rounding happens here and nowhere in the pricing math.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a percentage, dropping a trailing `.0`
pub fn format_percent(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{}%", percent as i64)
    } else {
        format!("{}%", percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_rounds_at_display() {
        assert_eq!(format_money(16.236), "$16.24");
        assert_eq!(format_money(48.708), "$48.71");
        assert_eq!(format_money(5.411999999999999), "$5.41");
        assert_eq!(format_money(0.0), "$0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(10.0), "10%");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
