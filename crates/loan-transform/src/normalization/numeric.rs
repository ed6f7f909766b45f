//! Numeric coercion.

use std::sync::LazyLock;

use regex::Regex;

/// First run of ASCII digits in a free-text cell.
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digits regex"));

/// A number whose integer part is grouped in threes: `1,234` or `-12,000.50`.
static THOUSANDS_GROUPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]{1,3}(,[0-9]{3})+(\.[0-9]+)?$").expect("Invalid thousands regex")
});

/// Best-effort parse of a numeric cell.
///
/// Handles:
/// - Standard numbers: "123", "-45.67", "1.5e3"
/// - Surrounding whitespace
/// - A trailing percent sign: "13.56%" → 13.56
/// - Thousands separators in proper groups of three: "1,234.5"
///
/// Any other comma ("1,5", "1,2,3"), NaN and infinities count as failures.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let unsuffixed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    let parsed: f64 = if unsuffixed.contains(',') {
        if !THOUSANDS_GROUPED.is_match(unsuffixed) {
            return None;
        }
        unsuffixed.replace(',', "").parse().ok()?
    } else {
        unsuffixed.parse().ok()?
    };
    parsed.is_finite().then_some(parsed)
}

/// First run of ASCII digits in the text, e.g. " 36 months" → 36.
pub fn leading_integer(value: &str) -> Option<i64> {
    DIGITS.find(value)?.as_str().parse().ok()
}
