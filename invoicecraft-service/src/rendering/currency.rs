//! Currency code to display symbol mapping.

/// Map an ISO 4217 code to its display symbol. A missing or blank code
/// defaults to `$`; an unregistered code is shown as-is.
pub fn currency_symbol(code: Option<&str>) -> String {
    let code = match code {
        Some(c) if !c.trim().is_empty() => c,
        _ => return "$".to_string(),
    };

    match code.to_uppercase().as_str() {
        "USD" => "$".to_string(),
        "EUR" => "\u{20ac}".to_string(),
        "GBP" => "\u{a3}".to_string(),
        "INR" => "\u{20b9}".to_string(),
        "CAD" => "CA$".to_string(),
        "AUD" => "A$".to_string(),
        "JPY" => "\u{a5}".to_string(),
        _ => code.to_string(),
    }
}

/// Format an amount for display: symbol plus two decimals, with non-finite
/// values clamped to zero.
pub fn format_money(symbol: &str, amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    format!("{}{:.2}", symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_symbols() {
        assert_eq!(currency_symbol(Some("USD")), "$");
        assert_eq!(currency_symbol(Some("EUR")), "\u{20ac}");
        assert_eq!(currency_symbol(Some("CAD")), "CA$");
        assert_eq!(currency_symbol(Some("jpy")), "\u{a5}");
    }

    #[test]
    fn missing_code_defaults_to_dollar() {
        assert_eq!(currency_symbol(None), "$");
        assert_eq!(currency_symbol(Some("")), "$");
        assert_eq!(currency_symbol(Some("   ")), "$");
    }

    #[test]
    fn unknown_code_falls_back_to_itself() {
        assert_eq!(currency_symbol(Some("CHF")), "CHF");
        assert_eq!(currency_symbol(Some("sek")), "sek");
    }

    #[test]
    fn money_formatting_clamps_non_finite() {
        assert_eq!(format_money("$", 150.5), "$150.50");
        assert_eq!(format_money("\u{20ac}", 0.0), "\u{20ac}0.00");
        assert_eq!(format_money("$", f64::NAN), "$0.00");
        assert_eq!(format_money("$", f64::INFINITY), "$0.00");
    }
}
