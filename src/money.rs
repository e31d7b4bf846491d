//! Tolerant monetary parsing and display formatting
//!
//! All free-text numeric input entering the engine goes through
//! [`parse_amount`], so downstream calculations can assume plain `f64` values.

/// Parse a free-text monetary amount, falling back to `default` on anything
/// unparsable (empty strings, stray labels, malformed numbers).
///
/// Accepts optional currency symbols/codes, thousands separators, and
/// surrounding whitespace: `"$1,234.56"`, `"SGD 5000"`, `" 1200 "`.
pub fn parse_amount(input: &str, default: f64) -> f64 {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        return default;
    }

    cleaned.parse::<f64>().unwrap_or(default)
}

/// Parse an optional raw field, treating `None` the same as unparsable text.
pub fn parse_optional_amount(input: Option<&str>, default: f64) -> f64 {
    input.map_or(default, |s| parse_amount(s, default))
}

/// Format an amount with thousands separators and two decimal places.
///
/// Display-only helper for the CLI; chart/presentation consumers receive raw
/// `f64` values and do their own locale handling.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{}.{:02}", grouped, frac)
    } else {
        format!("{}.{:02}", grouped, frac)
    }
}
